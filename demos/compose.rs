// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_sym::{
    back_reference, compile_pattern, compile_template, escape, exactly, named_capture,
    short_class, Reference,
};

pub fn main() -> Result<(), regex_sym::Error> {
    // match an ISO date and swap it into "day/month/year"
    let digit = short_class("digit")?;

    let pattern = compile_pattern(
        &[
            named_capture("year", &[exactly(4, &[digit.as_str()])]),
            escape("-"),
            named_capture("month", &[exactly(2, &[digit.as_str()])]),
            escape("-"),
            named_capture("day", &[exactly(2, &[digit.as_str()])]),
        ],
        [("caseless", false)],
    )?;

    let template = compile_template(&[
        back_reference(Reference::Name("day")),
        escape("/"),
        back_reference(Reference::Name("month")),
        escape("/"),
        back_reference(Reference::Name("year")),
    ]);

    println!("pattern:  {}", pattern);
    println!("template: {}", template);

    Ok(())
}
