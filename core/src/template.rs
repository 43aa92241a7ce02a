// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Timestamp;
use uuid::Uuid;

use crate::{PackingList, TripParams, TripType};

/// A named snapshot of trip parameters and an edited packing list.
///
/// Templates are immutable once saved: loading one replaces the working list
/// entirely, and there is no update in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTemplate {
    /// Unique identifier.
    pub id: String,

    /// Name given by the user.
    pub name: String,

    /// The parameters the list was generated from.
    #[serde(flatten)]
    pub params: TripParams,

    /// The items, including their checked state.
    pub items: PackingList,

    /// When the template was saved.
    pub created_at: Timestamp,
}

impl TripTemplate {
    /// Snapshot the given parameters and items under a new id.
    ///
    /// The city is only kept for city trips.
    pub fn new(name: impl Into<String>, mut params: TripParams, items: PackingList) -> Self {
        if params.trip_type != TripType::City {
            params.city = None;
        }

        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            params,
            items,
            created_at: Timestamp::now(),
        }
    }

    /// Whether this template is referred to by the given id or name.
    pub fn matches(&self, id_or_name: &str) -> bool {
        self.id == id_or_name || self.name == id_or_name
    }
}
