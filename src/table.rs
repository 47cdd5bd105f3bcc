// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// symbol tables
//
// every builder translates semantic names into regex syntax through one
// of the tables below. the tables are ordered (declaration order is the
// rendering order for inline options) and are built once on first use.
//
// - short class       \d \s \w \h \v \b
// - property          \p{L} \p{Lu} ... (two levels: general, specific)
// - named class       [:alnum:] [:alpha:] ...
// - quantity          ? * +
// - greed             (greedy) ? +
// - option            (?imnsxJU)
// - extra             (*UTF) (*LIMIT_MATCH=n) ...
// - group             (?:...) (?>...) (?=...) ...
// - anchor            . ^ $ \A \z \Z \G \K

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::error::{Error, Result};

pub(crate) const SHORT_CLASS_ENTRIES: &[(&str, &str)] = &[
    ("digit", "d"),
    ("space", "s"),
    ("word", "w"),
    ("horizontal_space", "h"),
    ("vertical_space", "v"),
    ("word_boundary", "b"),
];

pub(crate) const NAMED_CLASS_ENTRIES: &[(&str, &str)] = &[
    ("alphanumeric", "alnum"),
    ("alphabetic", "alpha"),
    ("ascii", "ascii"),
    ("blank", "blank"),
    ("control", "cntrl"),
    ("digit", "digit"),
    ("graphical", "graph"),
    ("lowercase", "lower"),
    ("printable", "print"),
    ("punctuation", "punct"),
    ("space", "space"),
    ("uppercase", "upper"),
    ("word", "word"),
    ("hex_digit", "xdigit"),
];

pub(crate) const QUANTITY_ENTRIES: &[(&str, &str)] =
    &[("maybe", "?"), ("none_or_some", "*"), ("some", "+")];

pub(crate) const GREED_ENTRIES: &[(&str, &str)] =
    &[("greedy", ""), ("lazy", "?"), ("possessive", "+")];

pub(crate) const OPTION_ENTRIES: &[(&str, &str)] = &[
    ("caseless", "i"),
    ("multiline", "m"),
    ("no_auto_capture", "n"),
    ("dotall", "s"),
    ("ignore_space", "x"),
    ("duplicate_names", "J"),
    ("ungreedy", "U"),
];

pub(crate) const EXTRA_ENTRIES: &[(&str, &str)] = &[
    ("utf", "UTF"),
    ("ucp", "UCP"),
    ("no_auto_possess", "NO_AUTO_POSSESS"),
    ("no_start_optimize", "NO_START_OPT"),
    ("no_dotstar_anchor", "NO_DOTSTAR_ANCHOR"),
    ("no_jit", "NO_JIT"),
    ("limit_match", "LIMIT_MATCH"),
    ("limit_depth", "LIMIT_DEPTH"),
    ("limit_heap", "LIMIT_HEAP"),
    ("newline_cr", "CR"),
    ("newline_lf", "LF"),
    ("newline_crlf", "CRLF"),
    ("newline_anycrlf", "ANYCRLF"),
    ("newline_any", "ANY"),
    ("newline_nul", "NUL"),
    ("bsr_anycrlf", "BSR_ANYCRLF"),
    ("bsr_unicode", "BSR_UNICODE"),
];

pub(crate) const GROUP_ENTRIES: &[(&str, &str)] = &[
    ("non_capturing", ":"),
    ("atomic", ">"),
    ("comment", "#"),
    ("lookahead", "="),
    ("negative_lookahead", "!"),
    ("lookbehind", "<="),
    ("negative_lookbehind", "<!"),
    ("branch_reset", "|"),
];

pub(crate) const ANCHOR_ENTRIES: &[(&str, &str)] = &[
    ("any", "."),
    ("start_of_line", "^"),
    ("end_of_line", "$"),
    ("start_of_subject", "\\A"),
    ("end_of_subject", "\\z"),
    ("end_of_subject_or_newline", "\\Z"),
    ("first_match_position", "\\G"),
    ("reset_match_start", "\\K"),
];

/// (general key, general code, specific table name, specific entries)
type PropertyEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static [(&'static str, &'static str)],
);

pub(crate) const PROPERTY_ENTRIES: &[PropertyEntry] = &[
    (
        "letter",
        "L",
        "property.letter",
        &[
            ("uppercase", "u"),
            ("lowercase", "l"),
            ("titlecase", "t"),
            ("modifier", "m"),
            ("other", "o"),
        ],
    ),
    (
        "mark",
        "M",
        "property.mark",
        &[("nonspacing", "n"), ("spacing", "c"), ("enclosing", "e")],
    ),
    (
        "number",
        "N",
        "property.number",
        &[("decimal", "d"), ("letter", "l"), ("other", "o")],
    ),
    (
        "punctuation",
        "P",
        "property.punctuation",
        &[
            ("connector", "c"),
            ("dash", "d"),
            ("open", "s"),
            ("close", "e"),
            ("initial", "i"),
            ("final", "f"),
            ("other", "o"),
        ],
    ),
    (
        "symbol",
        "S",
        "property.symbol",
        &[
            ("math", "m"),
            ("currency", "c"),
            ("modifier", "k"),
            ("other", "o"),
        ],
    ),
    (
        // the key keeps its historical spelling
        "seperator",
        "Z",
        "property.seperator",
        &[("space", "s"), ("line", "l"), ("paragraph", "p")],
    ),
    (
        "other",
        "C",
        "property.other",
        &[
            ("control", "c"),
            ("format", "f"),
            ("unassigned", "n"),
            ("private_use", "o"),
            ("surrogate", "s"),
        ],
    ),
];

pub static SHORT_CLASSES: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("short_class", SHORT_CLASS_ENTRIES));

pub static PROPERTIES: LazyLock<PropertyTable> =
    LazyLock::new(|| PropertyTable::new("property", PROPERTY_ENTRIES));

pub static NAMED_CLASSES: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("named_class", NAMED_CLASS_ENTRIES));

pub static QUANTITIES: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("quantity", QUANTITY_ENTRIES));

pub static GREEDS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("greed", GREED_ENTRIES));

pub static OPTIONS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("option", OPTION_ENTRIES));

pub static EXTRAS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("extra", EXTRA_ENTRIES));

pub static GROUPS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("group", GROUP_ENTRIES));

pub static ANCHORS: LazyLock<SymbolTable> =
    LazyLock::new(|| SymbolTable::new("anchor", ANCHOR_ENTRIES));

/// An ordered, immutable mapping from semantic names to regex tokens.
#[derive(Debug)]
pub struct SymbolTable {
    name: &'static str,
    entries: IndexMap<&'static str, &'static str>,
}

impl SymbolTable {
    fn new(name: &'static str, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            name,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the token of `key`, or `Error::KeyNotFound`.
    pub fn lookup(&self, key: &str) -> Result<&'static str> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| key_not_found(self.name, key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(key, token)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(key, token)| (*key, *token))
    }
}

/// The two-level Unicode general category table.
///
/// Each general category carries its one-letter code and a nested table
/// of subcategories, whose codes are appended to the general code.
#[derive(Debug)]
pub struct PropertyTable {
    name: &'static str,
    entries: IndexMap<&'static str, (&'static str, SymbolTable)>,
}

impl PropertyTable {
    fn new(name: &'static str, entries: &[PropertyEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|(key, code, specific_name, specific_entries)| {
                (*key, (*code, SymbolTable::new(*specific_name, specific_entries)))
            })
            .collect();

        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the one-letter code, or the two-letter code when
    /// `specific` is given.
    pub fn lookup(&self, general: &str, specific: Option<&str>) -> Result<String> {
        let (code, specifics) = self
            .entries
            .get(general)
            .ok_or_else(|| key_not_found(self.name, general))?;

        match specific {
            Some(key) => Ok(format!("{}{}", code, specifics.lookup(key)?)),
            None => Ok((*code).to_owned()),
        }
    }

    pub fn general_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn specific_keys(&self, general: &str) -> Result<impl Iterator<Item = &'static str> + '_> {
        match self.entries.get(general) {
            Some((_, specifics)) => Ok(specifics.keys()),
            None => Err(key_not_found(self.name, general)),
        }
    }
}

fn key_not_found(table: &'static str, key: &str) -> Error {
    tracing::debug!(table, key, "symbol lookup failed");

    Error::KeyNotFound {
        table,
        key: key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::Error;

    use super::{
        SymbolTable, ANCHORS, ANCHOR_ENTRIES, EXTRAS, EXTRA_ENTRIES, GREEDS, GREED_ENTRIES,
        GROUPS, GROUP_ENTRIES, NAMED_CLASSES, NAMED_CLASS_ENTRIES, OPTIONS, OPTION_ENTRIES,
        PROPERTIES, PROPERTY_ENTRIES, QUANTITIES, QUANTITY_ENTRIES, SHORT_CLASSES,
        SHORT_CLASS_ENTRIES,
    };

    fn check_table(table: &SymbolTable, entries: &[(&str, &str)]) {
        for (key, token) in entries {
            assert_eq!(table.lookup(key), Ok(*token));
        }

        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            entries.iter().map(|(key, _)| *key).collect::<Vec<_>>()
        );

        assert_eq!(
            table.lookup("no_such_key"),
            Err(Error::KeyNotFound {
                table: table.name(),
                key: "no_such_key".to_owned()
            })
        );
    }

    #[test]
    fn test_symbol_tables() {
        check_table(&SHORT_CLASSES, SHORT_CLASS_ENTRIES);
        check_table(&NAMED_CLASSES, NAMED_CLASS_ENTRIES);
        check_table(&QUANTITIES, QUANTITY_ENTRIES);
        check_table(&GREEDS, GREED_ENTRIES);
        check_table(&OPTIONS, OPTION_ENTRIES);
        check_table(&EXTRAS, EXTRA_ENTRIES);
        check_table(&GROUPS, GROUP_ENTRIES);
        check_table(&ANCHORS, ANCHOR_ENTRIES);
    }

    #[test]
    fn test_symbol_table_is_case_sensitive() {
        assert!(SHORT_CLASSES.contains_key("space"));
        assert!(!SHORT_CLASSES.contains_key("Space"));
        assert!(SHORT_CLASSES.lookup("SPACE").is_err());
    }

    #[test]
    fn test_property_table() {
        for (general, code, _, specifics) in PROPERTY_ENTRIES {
            assert_eq!(PROPERTIES.lookup(general, None), Ok((*code).to_owned()));

            for (specific, specific_code) in specifics.iter() {
                assert_eq!(
                    PROPERTIES.lookup(general, Some(*specific)),
                    Ok(format!("{}{}", code, specific_code))
                );
            }
        }

        assert_eq!(PROPERTIES.lookup("seperator", Some("space")).unwrap(), "Zs");
        assert_eq!(PROPERTIES.lookup("letter", Some("uppercase")).unwrap(), "Lu");
    }

    #[test]
    fn test_property_table_unknown_keys() {
        assert_eq!(
            PROPERTIES.lookup("separator", None),
            Err(Error::KeyNotFound {
                table: "property",
                key: "separator".to_owned()
            })
        );

        // the specific key is checked against its own category
        assert_eq!(
            PROPERTIES.lookup("letter", Some("dash")),
            Err(Error::KeyNotFound {
                table: "property.letter",
                key: "dash".to_owned()
            })
        );

        assert!(PROPERTIES.specific_keys("nothing").is_err());
    }

    #[test]
    fn test_property_table_keys() {
        assert_eq!(
            PROPERTIES.general_keys().collect::<Vec<_>>(),
            vec![
                "letter",
                "mark",
                "number",
                "punctuation",
                "symbol",
                "seperator",
                "other"
            ]
        );

        assert_eq!(
            PROPERTIES
                .specific_keys("seperator")
                .unwrap()
                .collect::<Vec<_>>(),
            vec!["space", "line", "paragraph"]
        );
    }
}
