// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// A reference to a capture group, used both in patterns (back-references)
/// and in substitution templates.
///
/// - `Name("year")`   -> `\g<year>`
/// - `Index(1)`       -> `\g<1>`
/// - `Relative(1)`    -> `\g<+1>`
/// - `Relative(-1)`   -> `\g<-1>`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Reference<'a> {
    Name(&'a str),
    Index(usize),

    // counted from the position of the reference
    Relative(isize),
}

impl<'a> From<&'a str> for Reference<'a> {
    fn from(name: &'a str) -> Self {
        Reference::Name(name)
    }
}

pub fn back_reference(reference: Reference) -> String {
    reference.to_string()
}
