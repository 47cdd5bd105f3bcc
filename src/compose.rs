// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use indexmap::IndexMap;

use crate::{error::Result, table::OPTIONS};

/// Concatenates fragments in the given order.
pub fn concat<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments.iter().map(|fragment| fragment.as_ref()).collect()
}

/// Concatenates fragments and wraps the result in a non-capturing group
/// when it is longer than one character.
///
/// A quantifier binds to the single preceding atom, so `ab` must become
/// `(?:ab)` before `+` is appended, whereas `a` can be quantified as is.
///
/// Note that the length is measured on the rendered text, not on atoms:
/// an escaped `\.` or a short class `\d` is two characters long and will
/// be wrapped as well.
pub fn wrap_if_needed<S: AsRef<str>>(fragments: &[S]) -> String {
    let body = concat(fragments);

    if body.chars().count() > 1 {
        format!("(?:{})", body)
    } else {
        body
    }
}

/// Renders the codes of the options whose flag is `true`, in the
/// declaration order of the option table.
///
/// Every key is checked, including the ones set to `false`.
/// A key given more than once takes its last value.
pub fn render_option_codes<K, I>(flags: I) -> Result<String>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, bool)>,
{
    let flags: Vec<(K, bool)> = flags.into_iter().collect();
    let mut selected: IndexMap<&str, bool> = IndexMap::new();

    for (key, enabled) in &flags {
        let key = key.as_ref();
        OPTIONS.lookup(key)?;
        selected.insert(key, *enabled);
    }

    let codes = OPTIONS
        .entries()
        .filter(|(key, _)| selected.get(*key).copied().unwrap_or(false))
        .map(|(_, code)| code)
        .collect();

    Ok(codes)
}
