// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of PackSmart.

mod cli;
mod cmd_generate;
mod cmd_generate_completion;
mod cmd_item;
mod cmd_list;
mod cmd_template;
mod config;
mod item_formatter;
mod table;
mod template_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
