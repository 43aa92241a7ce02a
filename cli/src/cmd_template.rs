// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use packsmart_core::PackSmart;

use crate::cmd_list::print_list;
use crate::template_formatter::TemplateFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdTemplateSave {
    pub name: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTemplateSave {
    pub const NAME: &str = "save";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Save the current packing list as a template")
            .arg(arg!(<NAME> "Name of the template"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: matches
                .get_one::<String>("NAME")
                .cloned()
                .unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "saving template...");
        let template = app.save_template(&self.name).await?;
        let formatter = TemplateFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&[template]));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdTemplateList {
    pub output_format: ArgOutputFormat,
}

impl CmdTemplateList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List saved templates")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing templates...");
        let templates = app.list_templates().await;
        if templates.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No templates saved".italic());
            return Ok(());
        }

        let formatter = TemplateFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&templates));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTemplateLoad {
    pub id_or_name: String,
    pub output_format: ArgOutputFormat,
}

impl CmdTemplateLoad {
    pub const NAME: &str = "load";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Replace the current packing list with a saved template")
            .arg(arg!(<TEMPLATE> "Id or name of the template"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id_or_name: matches
                .get_one::<String>("TEMPLATE")
                .cloned()
                .unwrap_or_default(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "loading template...");
        app.load_template(&self.id_or_name).await?;
        print_list(app, self.output_format);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTemplateDelete {
    pub ids: Vec<String>,
}

impl CmdTemplateDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete saved templates")
            .arg(arg!(<IDS> ... "Ids of the templates"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: matches
                .get_many::<String>("IDS")
                .map(|ids| ids.cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting templates...");
        for id in &self.ids {
            match app.delete_template(id).await? {
                true => println!("{} {}", "Deleted:".yellow(), id),
                false => println!("{} {}", "No template with id:".dimmed(), id),
            }
        }
        Ok(())
    }
}
