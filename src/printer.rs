// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    compile::{Pattern, Template},
    quantifier::{Limit, Quantifier},
    reference::Reference,
};

impl Display for Reference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reference::Name(name) => write!(f, "\\g<{}>", name),
            Reference::Index(index) => write!(f, "\\g<{}>", index),
            Reference::Relative(offset) => {
                if *offset >= 0 {
                    write!(f, "\\g<+{}>", offset)
                } else {
                    write!(f, "\\g<{}>", offset)
                }
            }
        }
    }
}

impl Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Limit::Finite(value) => write!(f, "{}", value),
            Limit::Infinity => f.write_str("∞"),
        }
    }
}

impl Display for Quantifier<'_> {
    // the keys are printed as given, they are only checked by `render`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantifier::Named { quantity, greed } => write!(f, "{} {}", quantity, greed),
            Quantifier::Exactly(count) => write!(f, "{{{}}}", count),
            Quantifier::Between(low, high) => write!(f, "{{{},{}}}", low, high),
        }
    }
}

impl Display for Pattern {
    // for debug
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.source(), self.flags())
    }
}

impl Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
