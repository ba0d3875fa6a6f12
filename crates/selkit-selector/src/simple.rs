use std::fmt;

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{FragmentKind, SelectorError, Stringify};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments are accumulated through the methods below, which return
/// `&mut Self` so calls can be chained with `?`. Every fragment must be
/// added in [`FragmentKind`] order; element, id, and pseudo-element hold a
/// single value while the other categories keep every value in insertion
/// order, duplicates included.
///
/// ```
/// use selkit_selector::{SimpleSelector, Stringify};
///
/// let mut selector = SimpleSelector::new();
/// selector.id("main")?.class_name("container")?.class_name("editable")?;
/// assert_eq!(selector.stringify(), "#main.container.editable");
/// # Ok::<(), selkit_selector::SelectorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    class_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
}

impl SimpleSelector {
    /// Create a selector with no fragments. It renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            class_names: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
        }
    }

    /// Create a selector holding exactly one fragment.
    ///
    /// An empty selector accepts any first fragment, so this cannot fail.
    #[must_use]
    pub fn with_fragment(kind: FragmentKind, value: impl Into<String>) -> Self {
        let mut selector = Self::new();
        selector.insert(kind, value.into());
        selector
    }

    /// Add a fragment of the given category.
    ///
    /// The named methods ([`element`](Self::element), [`id`](Self::id), ...)
    /// all delegate here.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::DuplicateKind`] if `kind` is a singleton slot that
    ///   is already filled.
    /// - [`SelectorError::Order`] if a fragment of a later category is
    ///   already present.
    ///
    /// An element is checked for ordering first, since it can only ever be
    /// the first fragment. Every other category reports duplication first.
    pub fn add(
        &mut self,
        kind: FragmentKind,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.check(kind)?;
        self.insert(kind, value.into());
        Ok(self)
    }

    /// Set the element (type) name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if any other fragment is present,
    /// otherwise [`SelectorError::DuplicateKind`] if an element is already set.
    pub fn element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::Element, value)
    }

    /// Set the id.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateKind`] if an id is already set, otherwise
    /// [`SelectorError::Order`] if a class, attribute, pseudo-class, or
    /// pseudo-element is present.
    pub fn id(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::Id, value)
    }

    /// Append a class name.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if an attribute, pseudo-class, or
    /// pseudo-element is present.
    pub fn class_name(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::Class, value)
    }

    /// Append an attribute condition, written without the surrounding
    /// brackets (`href$=".png"`).
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-class or pseudo-element is present.
    pub fn attr(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::Attribute, value)
    }

    /// Append a pseudo-class, written without the leading colon.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Order`] if a pseudo-element is present.
    pub fn pseudo_class(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::PseudoClass, value)
    }

    /// Set the pseudo-element, written without the leading colons.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateKind`] if a pseudo-element is already set.
    pub fn pseudo_element(&mut self, value: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.add(FragmentKind::PseudoElement, value)
    }

    /// The element name, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_value(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Attribute conditions in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-classes in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// Whether any fragment of `kind` is present.
    #[must_use]
    pub fn has(&self, kind: FragmentKind) -> bool {
        match kind {
            FragmentKind::Element => self.element.is_some(),
            FragmentKind::Id => self.id.is_some(),
            FragmentKind::Class => !self.class_names.is_empty(),
            FragmentKind::Attribute => !self.attributes.is_empty(),
            FragmentKind::PseudoClass => !self.pseudo_classes.is_empty(),
            FragmentKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// The latest category present, or `None` for an empty selector.
    #[must_use]
    pub fn highest_kind(&self) -> Option<FragmentKind> {
        FragmentKind::iter().rev().find(|&kind| self.has(kind))
    }

    /// Whether no fragment has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.highest_kind().is_none()
    }

    /// Every fragment in rendering order.
    pub fn fragments(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        let element = self.element.iter().map(|v| (FragmentKind::Element, v.as_str()));
        let id = self.id.iter().map(|v| (FragmentKind::Id, v.as_str()));
        let classes = self.class_names.iter().map(|v| (FragmentKind::Class, v.as_str()));
        let attributes = self.attributes.iter().map(|v| (FragmentKind::Attribute, v.as_str()));
        let pseudo_classes = self
            .pseudo_classes
            .iter()
            .map(|v| (FragmentKind::PseudoClass, v.as_str()));
        let pseudo_element = self
            .pseudo_element
            .iter()
            .map(|v| (FragmentKind::PseudoElement, v.as_str()));

        element
            .chain(id)
            .chain(classes)
            .chain(attributes)
            .chain(pseudo_classes)
            .chain(pseudo_element)
    }

    fn check(&self, kind: FragmentKind) -> Result<(), SelectorError> {
        let later = self.highest_kind().filter(|&present| present > kind);
        let duplicate = kind.is_singleton() && self.has(kind);

        match (later, duplicate) {
            (Some(present), _) if kind == FragmentKind::Element => Err(SelectorError::Order {
                attempted: kind,
                present,
            }),
            (_, true) => Err(SelectorError::DuplicateKind { kind }),
            (Some(present), false) => Err(SelectorError::Order {
                attempted: kind,
                present,
            }),
            (None, false) => Ok(()),
        }
    }

    fn insert(&mut self, kind: FragmentKind, value: String) {
        match kind {
            FragmentKind::Element => self.element = Some(value),
            FragmentKind::Id => self.id = Some(value),
            FragmentKind::Class => self.class_names.push(value),
            FragmentKind::Attribute => self.attributes.push(value),
            FragmentKind::PseudoClass => self.pseudo_classes.push(value),
            FragmentKind::PseudoElement => self.pseudo_element = Some(value),
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, value) in self.fragments() {
            let (open, close) = kind.delimiters();
            write!(f, "{open}{value}{close}")?;
        }
        Ok(())
    }
}

impl Stringify for SimpleSelector {}
