// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::PackingStyle;

/// Clothing worn once per day.
const DAILY_KEYWORDS: &[&str] = &["Underwear", "Socks"];

/// Clothing that can be worn over several days.
const MULTI_DAY_KEYWORDS: &[&str] = &["T-shirts", "Shirts", "Pants", "Shorts"];

/// Name of a packing item, with an optional quantity kept apart from the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ItemName {
    /// The name as authored in the tables or typed by the user.
    #[serde(rename = "name")]
    pub base: String,

    /// How many to pack, if the item scales with the trip length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl ItemName {
    /// A name without quantity.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            quantity: None,
        }
    }

    /// A clothing name, with the quantity computed from the trip length and style.
    pub fn clothing(base: &str, days: u32, style: PackingStyle) -> Self {
        Self {
            base: base.to_string(),
            quantity: clothing_quantity(days, base, style),
        }
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quantity {
            Some(quantity) => write!(f, "{} ({})", self.base, quantity),
            None => write!(f, "{}", self.base),
        }
    }
}

/// How many pieces of a clothing item to pack.
///
/// Returns `None` when the name contains neither a daily nor a multi-day keyword.
/// Keywords match case-sensitively, so "Wool socks" is not a daily item.
pub fn clothing_quantity(days: u32, name: &str, style: PackingStyle) -> Option<u32> {
    let days = u64::from(days);
    let quantity = if DAILY_KEYWORDS.iter().any(|k| name.contains(k)) {
        match style {
            PackingStyle::Light => (days.div_ceil(2) + 1).min(5),
            PackingStyle::Normal => (days + 1).min(8),
            PackingStyle::Heavy => (days + 2).min(12),
        }
    } else if MULTI_DAY_KEYWORDS.iter().any(|k| name.contains(k)) {
        match style {
            PackingStyle::Light => days.div_ceil(3) + 1,
            PackingStyle::Normal => days.div_ceil(2) + 1,
            // ceil(days / 1.5)
            PackingStyle::Heavy => (days * 2).div_ceil(3) + 1,
        }
    } else {
        return None;
    };

    Some(u32::try_from(quantity).unwrap_or(u32::MAX))
}
