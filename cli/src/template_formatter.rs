// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use packsmart_core::TripTemplate;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct TemplateFormatter {
    columns: Vec<TemplateColumn>,
    format: ArgOutputFormat,
}

impl TemplateFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TemplateColumn::Id,
                TemplateColumn::Name,
                TemplateColumn::Trip,
                TemplateColumn::Progress,
                TemplateColumn::CreatedAt,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, templates: &'a [TripTemplate]) -> Display<'a> {
        Display {
            templates,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    templates: &'a [TripTemplate],
    formatter: &'a TemplateFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                // Full records, as they are stored
                let json = serde_json::to_string_pretty(self.templates).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(
                    TableStyleBasic::new(),
                    &self.formatter.columns,
                    self.templates
                )
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TemplateColumn {
    Id,
    Name,
    Trip,
    Progress,
    CreatedAt,
}

impl TableColumn<TripTemplate> for TemplateColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TemplateColumn::Id => "id",
            TemplateColumn::Name => "name",
            TemplateColumn::Trip => "trip",
            TemplateColumn::Progress => "progress",
            TemplateColumn::CreatedAt => "createdAt",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a TripTemplate) -> Cow<'a, str> {
        match self {
            TemplateColumn::Id => data.id.as_str().into(),
            TemplateColumn::Name => data.name.as_str().into(),
            TemplateColumn::Trip => {
                let p = &data.params;
                let mut trip = format!(
                    "{}d {} {} {} {}",
                    p.days, p.weather, p.trip_type, p.travel_type, p.packing_style
                );
                if let Some(city) = p.city.as_deref().filter(|a| !a.trim().is_empty()) {
                    trip.push_str(&format!(" @{}", city.trim()));
                }
                trip.into()
            }
            TemplateColumn::Progress => {
                let (checked, total) = data.items.progress();
                format!("{checked}/{total}").into()
            }
            TemplateColumn::CreatedAt => data.created_at.strftime("%Y-%m-%d %H:%M").to_string().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TemplateColumn::Progress => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
