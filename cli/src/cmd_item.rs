// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use packsmart_core::{Category, PackSmart, PackingItem};

use crate::item_formatter::{ItemFormatter, NumberedItem};
use crate::util::{ArgOutputFormat, arg_refs, get_refs};

#[derive(Debug, Clone)]
pub struct CmdCheck {
    pub refs: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdCheck {
    pub const NAME: &str = "check";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark items as packed")
            .arg(arg_refs())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            refs: get_refs(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "checking items...");
        app.check_items(&self.refs, true).await?;
        print_items(app, &self.refs, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdUncheck {
    pub refs: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdUncheck {
    pub const NAME: &str = "uncheck";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Mark items as not packed")
            .arg(arg_refs())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            refs: get_refs(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "unchecking items...");
        app.check_items(&self.refs, false).await?;
        print_items(app, &self.refs, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdToggle {
    pub refs: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Flip the packed state of items")
            .arg(arg_refs())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            refs: get_refs(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling items...");
        app.toggle_items(&self.refs).await?;
        print_items(app, &self.refs, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdAdd {
    pub name: String,
    pub category: Category,
    pub output_format: ArgOutputFormat,
}

impl CmdAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add a custom item to the current packing list")
            .arg(arg!(<NAME> "Name of the item"))
            .arg(
                arg!(--category <CATEGORY> "Category of the item")
                    .value_parser(value_parser!(Category))
                    .default_value("misc"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: matches
                .get_one::<String>("NAME")
                .cloned()
                .unwrap_or_default(),
            category: matches
                .get_one("category")
                .copied()
                .unwrap_or(Category::Misc),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding custom item...");
        let item = app.add_custom_item(&self.name, self.category).await?;
        print_items(app, &[item.id], self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdRemove {
    pub refs: Vec<String>,
}

impl CmdRemove {
    pub const NAME: &str = "remove";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Remove custom items from the current packing list")
            .arg(arg_refs())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            refs: get_refs(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "removing custom items...");
        for item in app.delete_custom_items(&self.refs).await? {
            print_removed(&item);
        }
        Ok(())
    }
}

fn print_items(app: &PackSmart, refs: &[String], output_format: ArgOutputFormat) {
    let list = &app.session().items;
    let ids: Vec<&str> = refs
        .iter()
        .filter_map(|r| list.find(r))
        .map(|a| a.id.as_str())
        .collect();

    let items: Vec<_> = NumberedItem::all(list)
        .into_iter()
        .filter(|a| ids.contains(&a.item.id.as_str()))
        .collect();

    let formatter = ItemFormatter::new().with_output_format(output_format);
    println!("{}", formatter.format(&items));
}

fn print_removed(item: &PackingItem) {
    println!("{} {}", "Removed:".yellow(), item.display_name());
}
