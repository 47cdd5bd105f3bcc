// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// character class builders
//
// | builder          | positive     | negative      |
// |------------------|--------------|---------------|
// | short_class      | \s           | \S            |
// | property         | \p{Zs}       | \P{Zs}        |
// | script           | \p{Greek}    | \P{Greek}     |
// | one_of           | [abc]        | [^abc]        |
// | named_class      | [:alpha:]    | [:^alpha:]    |
//
// the negative form is looked up with the same key as the positive one,
// only the rendered syntax differs.

use crate::{
    error::Result,
    table::{NAMED_CLASSES, PROPERTIES, SHORT_CLASSES},
};

/// `\d`, `\s`, `\w` ...
pub fn short_class(key: &str) -> Result<String> {
    build_short_class(key, false)
}

/// `\D`, `\S`, `\W` ...
pub fn not_short_class(key: &str) -> Result<String> {
    build_short_class(key, true)
}

fn build_short_class(key: &str, negative: bool) -> Result<String> {
    let code = SHORT_CLASSES.lookup(key)?;
    let code = if negative {
        code.to_uppercase()
    } else {
        code.to_lowercase()
    };

    Ok(format!("\\{}", code))
}

/// A Unicode general category, e.g. `property("letter", None)` gives `\p{L}`
/// and `property("letter", Some("uppercase"))` gives `\p{Lu}`.
pub fn property(general: &str, specific: Option<&str>) -> Result<String> {
    build_property(general, specific, false)
}

/// The complement of a Unicode general category, e.g. `\P{Lu}`.
pub fn not_property(general: &str, specific: Option<&str>) -> Result<String> {
    build_property(general, specific, true)
}

fn build_property(general: &str, specific: Option<&str>, negative: bool) -> Result<String> {
    let code = PROPERTIES.lookup(general, specific)?;
    Ok(unicode_class(&code, negative))
}

/// A Unicode script, e.g. `\p{Greek}`.
///
/// Scripts are an open set defined by the regex engine, so the name is
/// passed through without being checked.
pub fn script(name: &str) -> String {
    unicode_class(name, false)
}

pub fn not_script(name: &str) -> String {
    unicode_class(name, true)
}

fn unicode_class(name: &str, negative: bool) -> String {
    if negative {
        format!("\\P{{{}}}", name)
    } else {
        format!("\\p{{{}}}", name)
    }
}

/// A character set, e.g. `[a-z_]`.
///
/// The items are concatenated verbatim, so they must already be escaped
/// (see `escape`) or be ranges (see `through`) or named classes.
pub fn one_of<S: AsRef<str>>(items: &[S]) -> String {
    build_one_of(items, false)
}

/// A negative character set, e.g. `[^a-z_]`.
pub fn not_one_of<S: AsRef<str>>(items: &[S]) -> String {
    build_one_of(items, true)
}

fn build_one_of<S: AsRef<str>>(items: &[S], negative: bool) -> String {
    let mut s = String::from(if negative { "[^" } else { "[" });
    for item in items {
        s.push_str(item.as_ref());
    }
    s.push(']');
    s
}

/// A character range for use inside `one_of`, e.g. `a-z`.
pub fn through(low: char, high: char) -> String {
    format!("{}-{}", low, high)
}

/// A POSIX named class for use inside `one_of`, e.g. `[:alpha:]`.
pub fn named_class(key: &str) -> Result<String> {
    build_named_class(key, false)
}

/// A negated POSIX named class, e.g. `[:^alpha:]`.
pub fn not_named_class(key: &str) -> Result<String> {
    build_named_class(key, true)
}

fn build_named_class(key: &str, negative: bool) -> Result<String> {
    let name = NAMED_CLASSES.lookup(key)?;

    if negative {
        Ok(format!("[:^{}:]", name))
    } else {
        Ok(format!("[:{}:]", name))
    }
}
