// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use packsmart_core::{APP_NAME, PackSmart};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate::CmdGenerate;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_item::{CmdAdd, CmdCheck, CmdRemove, CmdToggle, CmdUncheck};
use crate::cmd_list::CmdShow;
use crate::cmd_template::{CmdTemplateDelete, CmdTemplateList, CmdTemplateLoad, CmdTemplateSave};
use crate::config::parse_config;

/// Run the PackSmart command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Generate, check off and reuse packing lists for your trips.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // defaults to show
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/packsmart/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/packsmart/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdGenerate::command())
            .subcommand(CmdShow::command())
            .subcommand(CmdCheck::command())
            .subcommand(CmdUncheck::command())
            .subcommand(CmdToggle::command())
            .subcommand(CmdAdd::command())
            .subcommand(CmdRemove::command())
            .subcommand(
                Command::new("template")
                    .alias("tpl")
                    .about("Manage saved trip templates")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTemplateSave::command())
                    .subcommand(CmdTemplateList::command())
                    .subcommand(CmdTemplateLoad::command())
                    .subcommand(CmdTemplateDelete::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdGenerate::NAME, matches)) => Generate(CmdGenerate::from(matches)),
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdCheck::NAME, matches)) => Check(CmdCheck::from(matches)),
            Some((CmdUncheck::NAME, matches)) => Uncheck(CmdUncheck::from(matches)),
            Some((CmdToggle::NAME, matches)) => Toggle(CmdToggle::from(matches)),
            Some((CmdAdd::NAME, matches)) => Add(CmdAdd::from(matches)),
            Some((CmdRemove::NAME, matches)) => Remove(CmdRemove::from(matches)),
            Some(("template", matches)) => match matches.subcommand() {
                Some((CmdTemplateSave::NAME, matches)) => {
                    TemplateSave(CmdTemplateSave::from(matches))
                }
                Some((CmdTemplateList::NAME, matches)) => {
                    TemplateList(CmdTemplateList::from(matches))
                }
                Some((CmdTemplateLoad::NAME, matches)) => {
                    TemplateLoad(CmdTemplateLoad::from(matches))
                }
                Some((CmdTemplateDelete::NAME, matches)) => {
                    TemplateDelete(CmdTemplateDelete::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Show(CmdShow::new()),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Generate a new packing list
    Generate(CmdGenerate),

    /// Show the current packing list
    Show(CmdShow),

    /// Mark items as packed
    Check(CmdCheck),

    /// Mark items as not packed
    Uncheck(CmdUncheck),

    /// Flip the packed state of items
    Toggle(CmdToggle),

    /// Add a custom item
    Add(CmdAdd),

    /// Remove custom items
    Remove(CmdRemove),

    /// Save the current list as a template
    TemplateSave(CmdTemplateSave),

    /// List saved templates
    TemplateList(CmdTemplateList),

    /// Load a saved template
    TemplateLoad(CmdTemplateLoad),

    /// Delete saved templates
    TemplateDelete(CmdTemplateDelete),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Generate(a)       => Self::run_with(config, |x| a.run(x).boxed()).await,
            Show(a)           => Self::run_with(config, |x| a.run(x).boxed()).await,
            Check(a)          => Self::run_with(config, |x| a.run(x).boxed()).await,
            Uncheck(a)        => Self::run_with(config, |x| a.run(x).boxed()).await,
            Toggle(a)         => Self::run_with(config, |x| a.run(x).boxed()).await,
            Add(a)            => Self::run_with(config, |x| a.run(x).boxed()).await,
            Remove(a)         => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateSave(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateList(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateLoad(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            TemplateDelete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut PackSmart) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut app = PackSmart::new(config).await?;

        f(&mut app).await?;

        app.close().await?;
        Ok(())
    }
}
