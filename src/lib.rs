// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

#![doc = include_str!("../README.md")]

mod compose;
mod error;
mod printer;

pub mod charclass;
pub mod compile;
pub mod escape;
pub mod group;
pub mod quantifier;
pub mod reference;
pub mod table;

pub use charclass::{
    named_class, not_named_class, not_one_of, not_property, not_script, not_short_class, one_of,
    property, script, short_class, through,
};
pub use compile::{compile_pattern, compile_template, Pattern, Template};
pub use compose::{concat, wrap_if_needed};
pub use error::{Error, Result};
pub use escape::escape;
pub use group::{
    alternation, anchor, capture, extra, extra_with_value, group, named_capture, not_option,
    option,
};
pub use quantifier::{between, exactly, quantity, quantity_with, repeat, Limit, Quantifier};
pub use reference::{back_reference, Reference};
