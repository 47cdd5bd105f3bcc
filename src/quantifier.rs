// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// quantifiers
//
// - maybe          ?
// - none_or_some   *
// - some           +
// - exactly(n)     {n}
// - between(m, n)  {m,n}
// - between(m, ∞)  {m,}
//
// the named quantities take a greed suffix:
//
// - greedy         (none)
// - lazy           ?
// - possessive     +

use crate::{
    compose::wrap_if_needed,
    error::Result,
    table::{GREEDS, QUANTITIES},
};

pub const DEFAULT_GREED: &str = "greedy";

/// The upper bound of a `Between` quantifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limit {
    Finite(usize),
    Infinity,
}

impl From<usize> for Limit {
    fn from(value: usize) -> Self {
        Limit::Finite(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Quantifier<'a> {
    /// A key of the quantity table with a key of the greed table.
    Named { quantity: &'a str, greed: &'a str },
    Exactly(usize),
    Between(usize, Limit),
}

impl<'a> Quantifier<'a> {
    pub fn named(quantity: &'a str) -> Self {
        Quantifier::Named {
            quantity,
            greed: DEFAULT_GREED,
        }
    }

    pub fn with_greed(quantity: &'a str, greed: &'a str) -> Self {
        Quantifier::Named { quantity, greed }
    }

    /// Renders the quantifier syntax, without the repeated fragment.
    pub fn render(&self) -> Result<String> {
        match self {
            Quantifier::Named { quantity, greed } => {
                let quantity_code = QUANTITIES.lookup(quantity)?;
                let greed_code = GREEDS.lookup(greed)?;
                Ok(format!("{}{}", quantity_code, greed_code))
            }
            Quantifier::Exactly(count) => Ok(exact_suffix(*count)),
            Quantifier::Between(low, high) => Ok(range_suffix(*low, *high)),
        }
    }
}

fn exact_suffix(count: usize) -> String {
    format!("{{{}}}", count)
}

fn range_suffix(low: usize, high: Limit) -> String {
    match high {
        Limit::Finite(high) => format!("{{{},{}}}", low, high),
        Limit::Infinity => format!("{{{},}}", low),
    }
}

/// Applies a quantifier to a sequence of fragments.
///
/// The fragments are grouped with `(?:...)` first when their concatenation
/// is longer than one character.
pub fn repeat<S: AsRef<str>>(quantifier: &Quantifier, fragments: &[S]) -> Result<String> {
    let suffix = quantifier.render()?;
    Ok(format!("{}{}", wrap_if_needed(fragments), suffix))
}

/// e.g. `quantity("some", &["a"])` gives `a+`
pub fn quantity<S: AsRef<str>>(key: &str, fragments: &[S]) -> Result<String> {
    repeat(&Quantifier::named(key), fragments)
}

/// e.g. `quantity_with("none_or_some", "lazy", &["ab"])` gives `(?:ab)*?`
pub fn quantity_with<S: AsRef<str>>(key: &str, greed: &str, fragments: &[S]) -> Result<String> {
    repeat(&Quantifier::with_greed(key, greed), fragments)
}

/// e.g. `exactly(2, &["a"])` gives `a{2}`
pub fn exactly<S: AsRef<str>>(count: usize, fragments: &[S]) -> String {
    format!("{}{}", wrap_if_needed(fragments), exact_suffix(count))
}

/// e.g. `between(1, Limit::Finite(3), &["a"])` gives `a{1,3}`
/// and `between(2, Limit::Infinity, &["a"])` gives `a{2,}`
pub fn between<S: AsRef<str>>(low: usize, high: Limit, fragments: &[S]) -> String {
    format!("{}{}", wrap_if_needed(fragments), range_suffix(low, high))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{charclass::short_class, error::Error, escape::escape};

    use super::{between, exactly, quantity, quantity_with, repeat, Limit, Quantifier};

    #[test]
    fn test_quantity() {
        assert_eq!(quantity("some", &["a"]).unwrap(), "a+");
        assert_eq!(quantity("maybe", &["a"]).unwrap(), "a?");
        assert_eq!(quantity("none_or_some", &["a"]).unwrap(), "a*");
        assert_eq!(quantity("some", &["a", "b"]).unwrap(), "(?:ab)+");
    }

    #[test]
    fn test_quantity_with_greed() {
        assert_eq!(quantity_with("some", "greedy", &["a"]).unwrap(), "a+");
        assert_eq!(quantity_with("some", "lazy", &["a"]).unwrap(), "a+?");
        assert_eq!(quantity_with("maybe", "possessive", &["a"]).unwrap(), "a?+");
        assert_eq!(
            quantity_with("none_or_some", "lazy", &["ab"]).unwrap(),
            "(?:ab)*?"
        );
    }

    #[test]
    fn test_quantity_unknown_keys() {
        assert_eq!(
            quantity("plenty", &["a"]),
            Err(Error::KeyNotFound {
                table: "quantity",
                key: "plenty".to_owned()
            })
        );

        assert_eq!(
            quantity_with("some", "eager", &["a"]),
            Err(Error::KeyNotFound {
                table: "greed",
                key: "eager".to_owned()
            })
        );
    }

    #[test]
    fn test_exactly() {
        assert_eq!(exactly(2, &["a"]), "a{2}");
        assert_eq!(exactly(0, &["a"]), "a{0}");
        assert_eq!(exactly(3, &["a", "b"]), "(?:ab){3}");
    }

    #[test]
    fn test_between() {
        assert_eq!(between(1, Limit::Finite(3), &["a"]), "a{1,3}");
        assert_eq!(between(2, Limit::Infinity, &["a"]), "a{2,}");
        assert_eq!(between(0, Limit::from(5usize), &["xy"]), "(?:xy){0,5}");
    }

    #[test]
    fn test_grouping() {
        // a single character is never grouped
        assert_eq!(quantity("some", &["é"]).unwrap(), "é+");

        // multi-character fragments are grouped exactly once,
        // even when they form a single atom
        assert_eq!(
            quantity("some", &[short_class("digit").unwrap()]).unwrap(),
            r"(?:\d)+"
        );
        assert_eq!(quantity("maybe", &[escape(".")]).unwrap(), r"(?:\.)?");
        assert_eq!(
            exactly(2, &[escape("a"), escape("-"), escape("b")]),
            r"(?:a\-b){2}"
        );
    }

    #[test]
    fn test_repeat() {
        let fragments = ["ab", "c"];
        assert_eq!(
            repeat(&Quantifier::named("some"), &fragments).unwrap(),
            "(?:abc)+"
        );
        assert_eq!(
            repeat(&Quantifier::Exactly(4), &fragments).unwrap(),
            "(?:abc){4}"
        );
        assert_eq!(
            repeat(&Quantifier::Between(1, Limit::Infinity), &["a"]).unwrap(),
            "a{1,}"
        );
    }

    #[test]
    fn test_quantifier_render() {
        assert_eq!(Quantifier::named("maybe").render().unwrap(), "?");
        assert_eq!(
            Quantifier::with_greed("none_or_some", "possessive")
                .render()
                .unwrap(),
            "*+"
        );
        assert_eq!(Quantifier::Exactly(7).render().unwrap(), "{7}");
        assert_eq!(
            Quantifier::Between(2, Limit::Finite(4)).render().unwrap(),
            "{2,4}"
        );
        assert!(Quantifier::with_greed("some", "slow").render().is_err());
    }
}
