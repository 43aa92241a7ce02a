// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use packsmart_core::{
    PackingItem, PackingList, category_display_name, group_items_by_category,
};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

/// An item together with its 1-based position in the working list.
#[derive(Debug, Clone, Copy)]
pub struct NumberedItem<'a> {
    pub number: usize,
    pub item: &'a PackingItem,
}

impl<'a> NumberedItem<'a> {
    /// Number every item of a list.
    pub fn all(list: &'a PackingList) -> Vec<Self> {
        list.items()
            .iter()
            .enumerate()
            .map(|(i, item)| Self {
                number: i + 1,
                item,
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct ItemFormatter {
    columns: Vec<ItemColumn>,
    format: ArgOutputFormat,
    grouped: bool,
}

impl ItemFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![ItemColumn::Number, ItemColumn::Checked, ItemColumn::Name],
            format: ArgOutputFormat::Table,
            grouped: false,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show table output under one heading per category, with packing progress.
    pub fn with_grouping(mut self, grouped: bool) -> Self {
        self.grouped = grouped;
        self
    }

    pub fn format<'a>(&'a self, items: &'a [NumberedItem<'a>]) -> Display<'a> {
        Display {
            items,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    items: &'a [NumberedItem<'a>],
    formatter: &'a ItemFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.formatter.format, self.formatter.grouped) {
            (ArgOutputFormat::Json, _) => {
                let columns = [
                    ItemColumn::Number,
                    ItemColumn::Id,
                    ItemColumn::PlainName,
                    ItemColumn::Category,
                    ItemColumn::CheckedFlag,
                    ItemColumn::Custom,
                ];
                write!(f, "{}", Table::new(TableStyleJson::new(), &columns, self.items))
            }
            (ArgOutputFormat::Table, false) => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, self.items)
            ),
            (ArgOutputFormat::Table, true) => self.fmt_grouped(f),
        }
    }
}

impl Display<'_> {
    fn fmt_grouped(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<_> = self.items.iter().map(|a| a.item.clone()).collect();
        for (i, (category, bucket)) in group_items_by_category(&items).into_iter().enumerate() {
            let rows: Vec<_> = self
                .items
                .iter()
                .filter(|a| bucket.iter().any(|b| b.id == a.item.id))
                .copied()
                .collect();

            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            let heading = category_display_name(category.as_ref());
            writeln!(
                f,
                "{} {}",
                heading.bold(),
                format!("({})", rows.len()).dimmed()
            )?;
            write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), &self.formatter.columns, &rows)
            )?;
        }

        let checked = self.items.iter().filter(|a| a.item.checked).count();
        let total = self.items.len();
        let progress = format!("Packed {checked}/{total}");
        if !self.items.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
        }
        match checked == total && total > 0 {
            true => write!(f, "{}", progress.green().bold()),
            false => write!(f, "{}", progress.italic()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ItemColumn {
    Number,
    Checked,
    /// Checked state as `true`/`false`.
    CheckedFlag,
    Name,
    /// Name without the custom marker.
    PlainName,
    Category,
    Custom,
    Id,
}

impl<'b> TableColumn<NumberedItem<'b>> for ItemColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ItemColumn::Number => "number",
            ItemColumn::Checked | ItemColumn::CheckedFlag => "checked",
            ItemColumn::Name | ItemColumn::PlainName => "name",
            ItemColumn::Category => "category",
            ItemColumn::Custom => "isCustom",
            ItemColumn::Id => "id",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a NumberedItem<'b>) -> Cow<'a, str> {
        match self {
            ItemColumn::Number => data.number.to_string().into(),
            ItemColumn::Checked => match data.item.checked {
                true => "[x]".into(),
                false => "[ ]".into(),
            },
            ItemColumn::CheckedFlag => data.item.checked.to_string().into(),
            ItemColumn::Name => match data.item.is_custom {
                true => format!("{} *", data.item.display_name()).into(),
                false => data.item.display_name().into(),
            },
            ItemColumn::PlainName => data.item.display_name().into(),
            ItemColumn::Category => data.item.category.to_string().into(),
            ItemColumn::Custom => data.item.is_custom.to_string().into(),
            ItemColumn::Id => data.item.id.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            ItemColumn::Number => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
