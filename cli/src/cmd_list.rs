// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use packsmart_core::PackSmart;

use crate::item_formatter::{ItemFormatter, NumberedItem};
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdShow {
    pub output_format: ArgOutputFormat,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("Show the current packing list")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn new() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing packing list...");
        print_list(app, self.output_format);
        Ok(())
    }
}

/// Print the whole working list, grouped by category in table mode.
pub fn print_list(app: &PackSmart, output_format: ArgOutputFormat) {
    let session = app.session();
    if session.items.is_empty() && output_format == ArgOutputFormat::Table {
        match session.params {
            Some(_) => println!("{}", "No items match this trip".italic()),
            None => println!(
                "{}",
                "No packing list yet, run `packsmart generate` to create one".italic()
            ),
        }
        return;
    }

    if let (Some(params), ArgOutputFormat::Table) = (&session.params, output_format) {
        println!(
            "{} {} days, {} {} trip, {} travel, {} packing",
            "Trip:".bold(),
            params.days,
            params.weather,
            params.trip_type,
            params.travel_type,
            params.packing_style,
        );
        println!();
    }

    let items = NumberedItem::all(&session.items);
    let formatter = ItemFormatter::new()
        .with_output_format(output_format)
        .with_grouping(true);
    println!("{}", formatter.format(&items));
}
