// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Errors raised while building fragments.
///
/// The only check this crate performs is the table lookup, whether the
/// assembled text is accepted by a regex engine is decided by that engine.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum Error {
    /// A semantic name is absent from the symbol table it was looked up in.
    #[error("key \"{key}\" not found in table \"{table}\"")]
    KeyNotFound { table: &'static str, key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
