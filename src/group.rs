// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// groups, inline options and global directives
//
// - a|b             alternation
// - (...)           capture
// - (?<name>...)    named capture
// - (?:...)         non-capturing group
// - (?>...)         atomic group
// - (?#...)         comment
// - (?=...)         lookahead
// - (?!...)         negative lookahead
// - (?<=...)        lookbehind
// - (?<!...)        negative lookbehind
// - (?|...)         branch reset
// - (?ix)           inline options
// - (?-ix)          inline options off
// - (*UTF)          global extra
// - (*LIMIT_MATCH=n)

use crate::{
    compose::{concat, render_option_codes},
    error::Result,
    table::{ANCHORS, EXTRAS, GROUPS},
};

/// Joins fragments with `|`.
///
/// No group is added, e.g. `alternation(&["a", "b"])` followed by `c` reads
/// as `a|bc`, wrap it with `group("non_capturing", ...)` when needed.
pub fn alternation<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.as_ref())
        .collect::<Vec<&str>>()
        .join("|")
}

pub fn capture<S: AsRef<str>>(fragments: &[S]) -> String {
    format!("({})", concat(fragments))
}

pub fn named_capture<S: AsRef<str>>(name: &str, fragments: &[S]) -> String {
    format!("(?<{}>{})", name, concat(fragments))
}

/// Wraps fragments in a group of the given kind,
/// e.g. `group("lookahead", &["a"])` gives `(?=a)`.
pub fn group<S: AsRef<str>>(kind: &str, fragments: &[S]) -> Result<String> {
    let code = GROUPS.lookup(kind)?;
    Ok(format!("(?{}{})", code, concat(fragments)))
}

/// Turns inline options on, e.g. `option([("caseless", true)])` gives `(?i)`.
///
/// Only the options whose flag is `true` are rendered, in the declaration
/// order of the option table.
pub fn option<K, I>(flags: I) -> Result<String>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, bool)>,
{
    build_option(flags, false)
}

/// Turns inline options off, e.g. `not_option([("caseless", true)])` gives `(?-i)`.
pub fn not_option<K, I>(flags: I) -> Result<String>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, bool)>,
{
    build_option(flags, true)
}

fn build_option<K, I>(flags: I, negative: bool) -> Result<String>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, bool)>,
{
    let codes = render_option_codes(flags)?;

    if negative {
        Ok(format!("(?-{})", codes))
    } else {
        Ok(format!("(?{})", codes))
    }
}

/// A global directive, e.g. `extra("utf")` gives `(*UTF)`.
///
/// Directives are only honored by the engine at the very start
/// of the pattern.
pub fn extra(key: &str) -> Result<String> {
    let name = EXTRAS.lookup(key)?;
    Ok(format!("(*{})", name))
}

/// A global directive with a value, e.g. `extra_with_value("limit_match", 1000)`
/// gives `(*LIMIT_MATCH=1000)`.
pub fn extra_with_value(key: &str, value: u64) -> Result<String> {
    let name = EXTRAS.lookup(key)?;
    Ok(format!("(*{}={})", name, value))
}

/// An anchor or a position assertion, e.g. `anchor("start_of_line")` gives `^`.
pub fn anchor(key: &str) -> Result<String> {
    ANCHORS.lookup(key).map(|token| token.to_owned())
}
