// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Item references: 1-based positions as shown by `show`, or item ids.
pub fn arg_refs() -> Arg {
    arg!(<REFS> ... "Positions or ids of the items")
}

pub fn get_refs(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("REFS")
        .map(|refs| refs.cloned().collect())
        .unwrap_or_default()
}
