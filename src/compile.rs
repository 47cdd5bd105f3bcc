// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use crate::{
    compose::{concat, render_option_codes},
    error::Result,
};

/// Regex source text paired with its option flags, ready to be handed
/// to a PCRE-flavored engine.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Returns `(source, flags)`.
    pub fn into_parts(self) -> (String, String) {
        (self.source, self.flags)
    }

    /// The source with the flags prepended as an inline option group,
    /// for engines that take no separate flags argument.
    ///
    /// e.g. source `a+` with flags `ix` gives `(?ix)a+`
    pub fn to_inline_source(&self) -> String {
        if self.flags.is_empty() {
            self.source.clone()
        } else {
            format!("(?{}){}", self.flags, self.source)
        }
    }
}

/// The replacement text of a substitution, capture groups are referred
/// to with `\g<name>` and `\g<index>`.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Template {
    text: String,
}

impl Template {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

/// Concatenates fragments in the given order and renders the option flags.
///
/// The source is not checked for well-formedness, e.g. unbalanced groups
/// are only reported by the engine that compiles the pattern.
pub fn compile_pattern<S, K, I>(fragments: &[S], options: I) -> Result<Pattern>
where
    S: AsRef<str>,
    K: AsRef<str>,
    I: IntoIterator<Item = (K, bool)>,
{
    let flags = render_option_codes(options)?;
    let source = concat(fragments);

    tracing::trace!(source = %source, flags = %flags, "pattern compiled");

    Ok(Pattern { source, flags })
}

/// Concatenates fragments in the given order into a substitution template.
pub fn compile_template<S: AsRef<str>>(fragments: &[S]) -> Template {
    let text = concat(fragments);

    tracing::trace!(template = %text, "template compiled");

    Template { text }
}
