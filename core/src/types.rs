// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Expected weather at the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    /// Hot and sunny.
    Hot,

    /// Warm, mild days.
    Warm,

    /// Cool, layers needed.
    Cool,

    /// Cold, winter clothing needed.
    Cold,

    /// Rainy, waterproof gear needed.
    Rainy,
}

/// The kind of trip, which selects the trip-specific item table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    /// Business trip.
    Business,

    /// Beach holiday.
    Beach,

    /// Hiking or outdoor trip.
    Hiking,

    /// City break, enables city-specific recommendations.
    City,

    /// Winter or ski trip.
    Winter,
}

/// Whether the trip crosses a border.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TravelType {
    /// Domestic travel.
    #[default]
    Local,

    /// International travel, adds documents and adapters.
    International,
}

/// How much to pack. Controls both list length and clothing quantities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PackingStyle {
    /// Only the essentials.
    Light,

    /// A balanced list.
    #[default]
    Normal,

    /// Everything, just in case.
    Heavy,
}

/// The bucket an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Clothing, eligible for quantity scaling.
    Clothing,

    /// Toiletries.
    Toiletries,

    /// Tech and electronics.
    Tech,

    /// Travel documents.
    #[cfg_attr(feature = "clap", value(name = "travel-docs", alias = "travelDocs"))]
    TravelDocs,

    /// Everything else.
    Misc,
}

const CATEGORY_CLOTHING: &str = "clothing";
const CATEGORY_TOILETRIES: &str = "toiletries";
const CATEGORY_TECH: &str = "tech";
const CATEGORY_TRAVEL_DOCS: &str = "travelDocs";
const CATEGORY_MISC: &str = "misc";

impl Category {
    /// All categories in their canonical order.
    pub const ALL: [Category; 5] = [
        Category::Clothing,
        Category::Toiletries,
        Category::Tech,
        Category::TravelDocs,
        Category::Misc,
    ];

    /// Human-readable label of the category.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Toiletries => "Toiletries",
            Category::Tech => "Tech & Electronics",
            Category::TravelDocs => "Travel Documents",
            Category::Misc => "Miscellaneous",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Clothing => CATEGORY_CLOTHING,
            Category::Toiletries => CATEGORY_TOILETRIES,
            Category::Tech => CATEGORY_TECH,
            Category::TravelDocs => CATEGORY_TRAVEL_DOCS,
            Category::Misc => CATEGORY_MISC,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_CLOTHING => Ok(Category::Clothing),
            CATEGORY_TOILETRIES => Ok(Category::Toiletries),
            CATEGORY_TECH => Ok(Category::Tech),
            CATEGORY_TRAVEL_DOCS => Ok(Category::TravelDocs),
            CATEGORY_MISC => Ok(Category::Misc),
            _ => Err(()),
        }
    }
}

macro_rules! impl_lowercase_str {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_ref())
            }
        }
    };
}

impl_lowercase_str!(Weather {
    Hot => "hot",
    Warm => "warm",
    Cool => "cool",
    Cold => "cold",
    Rainy => "rainy",
});

impl_lowercase_str!(TripType {
    Business => "business",
    Beach => "beach",
    Hiking => "hiking",
    City => "city",
    Winter => "winter",
});

impl_lowercase_str!(TravelType {
    Local => "local",
    International => "international",
});

impl_lowercase_str!(PackingStyle {
    Light => "light",
    Normal => "normal",
    Heavy => "heavy",
});
