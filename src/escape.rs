// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Escapes literal text so that it matches itself.
///
/// Every ASCII punctuation character is preceded by a backslash, all other
/// characters are copied unchanged. The result is not idempotent: escaping
/// twice doubles the backslashes, so each literal must be escaped once.
///
/// e.g. `1+1=2?` becomes `1\+1\=2\?`
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii_punctuation() {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
