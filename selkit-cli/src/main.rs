//! selkit CLI
//!
//! Builds a selector from fragments given on the command line and prints
//! its text, or its tree as JSON.
//!
//! ```text
//! selkit element=a 'attr=href$=".png"' pseudo-class=focus
//! selkit element=ul class=nav '>' element=li --json
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use selkit_common::json;
use selkit_common::warning::warn_once;
use selkit_selector::{
    Combinator, FragmentKind, SelectorNode, SimpleSelector, Stringify, builder,
};

#[derive(Debug, Parser)]
#[command(name = "selkit", version, about = "Build a CSS selector from typed fragments")]
struct Cli {
    /// Fragments as `kind=value` (element, id, class, attr, pseudo-class,
    /// pseudo-element) and combinators (`+`, `~`, `>`, `descendant`,
    /// `combinator=<symbol>`), in order
    #[arg(required = true)]
    fragments: Vec<String>,

    /// Print the selector tree as JSON instead of selector text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Token {
    Fragment(FragmentKind, String),
    Combinator(Combinator),
}

fn parse_token(raw: &str) -> Result<Token> {
    match raw {
        "+" | "~" | ">" => return Ok(Token::Combinator(Combinator::from(raw))),
        "descendant" => return Ok(Token::Combinator(Combinator::Descendant)),
        _ => {}
    }

    let Some((kind, value)) = raw.split_once('=') else {
        bail!("expected `kind=value` or a combinator, got `{raw}`");
    };

    if kind == "combinator" {
        let combinator = Combinator::from(value);
        if !combinator.is_canonical() {
            warn_once("cli", &format!("non-canonical combinator {value:?}"));
        }
        return Ok(Token::Combinator(combinator));
    }

    let kind = kind
        .parse::<FragmentKind>()
        .with_context(|| format!("unknown fragment kind `{kind}` in `{raw}`"))?;
    Ok(Token::Fragment(kind, value.to_owned()))
}

/// Group fragments into compound selectors split by combinators, then join
/// them right to left so `a + b ~ c` nests as `a + (b ~ c)`.
fn build(tokens: Vec<Token>) -> Result<SelectorNode> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current = SimpleSelector::new();

    for token in tokens {
        match token {
            Token::Fragment(kind, value) => {
                let _ = current
                    .add(kind, value.as_str())
                    .with_context(|| format!("cannot add {kind} `{value}`"))?;
            }
            Token::Combinator(combinator) => {
                if current.is_empty() {
                    bail!("combinator `{combinator}` has no selector on its left");
                }
                compounds.push(std::mem::take(&mut current));
                combinators.push(combinator);
            }
        }
    }

    if current.is_empty() {
        match combinators.last() {
            Some(combinator) => bail!("combinator `{combinator}` has no selector on its right"),
            None => bail!("no fragments given"),
        }
    }

    let mut node = SelectorNode::from(current);
    while let (Some(left), Some(combinator)) = (compounds.pop(), combinators.pop()) {
        node = builder::combine(left, combinator, node).into();
    }
    Ok(node)
}

fn run(cli: &Cli) -> Result<String> {
    let tokens = cli
        .fragments
        .iter()
        .map(|raw| parse_token(raw))
        .collect::<Result<Vec<_>>>()?;
    let selector = build(tokens)?;

    if cli.json {
        json::stringify_pretty(&selector).context("failed to encode selector")
    } else {
        Ok(selector.stringify())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("selkit").chain(args.iter().copied()))?;
        run(&cli)
    }

    #[test]
    fn compound_selector() {
        let output = run_args(&["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"]).unwrap();
        assert_eq!(output, r#"a[href$=".png"]:focus"#);
    }

    #[test]
    fn combinators_nest_to_the_right() {
        let output = run_args(&[
            "element=A",
            "+",
            "element=B",
            "~",
            "element=C",
            "descendant",
            "element=D",
        ])
        .unwrap();
        assert_eq!(output, "A + B ~ C   D");
    }

    #[test]
    fn explicit_combinator_symbol() {
        let output = run_args(&["class=a", "combinator=>", "class=b"]).unwrap();
        assert_eq!(output, ".a > .b");
    }

    #[test]
    fn non_canonical_combinator_is_kept_and_warned() {
        let output = run_args(&["class=a", "combinator=||", "class=b"]).unwrap();
        assert_eq!(output, ".a || .b");
        assert!(
            selkit_common::warning::recorded_warnings()
                .iter()
                .any(|w| w == r#"[cli] non-canonical combinator "||""#)
        );
    }

    #[test]
    fn ordering_error_is_reported() {
        let err = run_args(&["class=a", "id=main"]).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "cannot add id `main`: id fragment cannot follow class fragment"
        );
    }

    #[test]
    fn duplicate_error_is_reported() {
        let err = run_args(&["id=a", "id=b"]).unwrap_err();
        assert!(format!("{err:#}").ends_with("id fragment is already set"));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(run_args(&["div"]).is_err());
        assert!(run_args(&["colour=red"]).is_err());
        assert!(run_args(&[">", "element=a"]).is_err());
        assert!(run_args(&["element=a", "+"]).is_err());
    }

    #[test]
    fn json_output() {
        let output = run_args(&["--json", "id=main", ">", "class=item"]).unwrap();
        let value: serde_json::Value = json::parse(&output).unwrap();
        assert_eq!(value["type"], "combined");
        assert_eq!(value["combinator"], ">");
        assert_eq!(value["left"]["id"], "main");
        assert_eq!(value["right"]["class_names"][0], "item");
    }

    #[test]
    fn parse_token_kinds() {
        assert_eq!(
            parse_token("pseudo-element=before").unwrap(),
            Token::Fragment(FragmentKind::PseudoElement, "before".to_owned())
        );
        assert_eq!(
            parse_token("~").unwrap(),
            Token::Combinator(Combinator::SubsequentSibling)
        );
    }
}
