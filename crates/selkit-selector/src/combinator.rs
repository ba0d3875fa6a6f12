use std::fmt;

use serde::{Serialize, Serializer};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Any symbol is accepted. Unrecognized symbols are kept as
/// [`Combinator::Other`] and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    ///
    /// Symbol: a single space.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,

    /// Any other symbol, kept as given.
    Other(String),
}

impl Combinator {
    /// Recognize one of the four canonical symbols, or keep the text as
    /// [`Combinator::Other`].
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        Self::canonical(symbol).unwrap_or_else(|| Self::Other(symbol.to_owned()))
    }

    fn canonical(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }

    /// The literal symbol written between the two selectors.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Other(symbol) => symbol,
        }
    }

    /// Whether this is one of the four combinators CSS defines.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Combinator {
    fn from(symbol: &str) -> Self {
        Self::from_symbol(symbol)
    }
}

impl From<String> for Combinator {
    fn from(symbol: String) -> Self {
        Self::canonical(&symbol).unwrap_or(Self::Other(symbol))
    }
}

impl From<char> for Combinator {
    fn from(symbol: char) -> Self {
        Self::from_symbol(symbol.encode_utf8(&mut [0; 4]))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Combinator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
