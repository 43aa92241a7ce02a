// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Static item tables.
//!
//! Every list is ordered from most to least essential, since packing styles keep
//! a prefix of each list.

use crate::{Category, TripType, Weather};

/// Item names grouped by category.
pub type ItemTable = &'static [(Category, &'static [&'static str])];

/// Items everyone needs.
pub const BASE_ITEMS: ItemTable = &[
    (Category::Clothing, &["Underwear", "Socks", "Pajamas"]),
    (
        Category::Toiletries,
        &[
            "Toothbrush",
            "Toothpaste",
            "Deodorant",
            "Shampoo",
            "Body wash",
            "Sunscreen",
        ],
    ),
    (Category::Tech, &["Phone charger", "Power bank", "Headphones"]),
    (
        Category::TravelDocs,
        &["ID/Driver's License", "Travel tickets", "Hotel confirmation"],
    ),
    (
        Category::Misc,
        &["Wallet", "Keys", "Medications", "Reusable water bottle"],
    ),
];

/// Add-ons for international travel. Contains no clothing.
pub const INTERNATIONAL_ITEMS: ItemTable = &[
    (
        Category::TravelDocs,
        &[
            "Passport",
            "Visa documents",
            "Travel insurance",
            "Vaccination records",
            "Emergency contacts",
            "Copies of important documents",
        ],
    ),
    (
        Category::Tech,
        &["Universal power adapter", "Currency converter app"],
    ),
    (
        Category::Misc,
        &[
            "Foreign currency",
            "Language translation app/book",
            "International SIM card",
        ],
    ),
];

/// Items for the expected weather.
pub fn weather_items(weather: Weather) -> ItemTable {
    match weather {
        Weather::Hot => &[
            (
                Category::Clothing,
                &[
                    "T-shirts",
                    "Shorts",
                    "Sandals",
                    "Sunglasses",
                    "Hat",
                    "Swimsuit",
                    "Light dress/shirt",
                ],
            ),
            (
                Category::Misc,
                &[
                    "Sunscreen (extra)",
                    "Aloe vera gel",
                    "Insect repellent",
                    "Cooling towel",
                ],
            ),
        ],
        Weather::Warm => &[
            (
                Category::Clothing,
                &[
                    "T-shirts",
                    "Light pants",
                    "Sneakers",
                    "Light jacket",
                    "Sunglasses",
                ],
            ),
            (Category::Misc, &["Light scarf"]),
        ],
        Weather::Cool => &[
            (
                Category::Clothing,
                &[
                    "Long-sleeve shirts",
                    "Jeans",
                    "Sweater",
                    "Jacket",
                    "Closed shoes",
                ],
            ),
            (Category::Misc, &["Light gloves", "Scarf"]),
        ],
        Weather::Cold => &[
            (
                Category::Clothing,
                &[
                    "Thermal underwear",
                    "Warm sweaters",
                    "Winter coat",
                    "Boots",
                    "Warm hat",
                    "Gloves",
                    "Scarf",
                    "Wool socks",
                ],
            ),
            (Category::Misc, &["Hand warmers", "Lip balm", "Moisturizer"]),
        ],
        Weather::Rainy => &[
            (
                Category::Clothing,
                &["Rain jacket", "Waterproof shoes", "Extra socks"],
            ),
            (
                Category::Misc,
                &["Umbrella", "Waterproof bag", "Plastic bags for wet items"],
            ),
        ],
    }
}

/// Items for the kind of trip.
pub fn trip_type_items(trip_type: TripType) -> ItemTable {
    match trip_type {
        TripType::Business => &[
            (
                Category::Clothing,
                &[
                    "Dress shirts",
                    "Dress pants/skirt",
                    "Blazer",
                    "Dress shoes",
                    "Belt",
                    "Tie/accessories",
                ],
            ),
            (
                Category::Tech,
                &[
                    "Laptop",
                    "Laptop charger",
                    "Business cards",
                    "Notebook",
                    "Pen",
                ],
            ),
            (
                Category::Misc,
                &["Portfolio/briefcase", "Presentation materials"],
            ),
        ],
        TripType::Beach => &[
            (
                Category::Clothing,
                &[
                    "Swimsuits (2-3)",
                    "Beach cover-up",
                    "Flip-flops",
                    "Beach hat",
                    "Sarong",
                ],
            ),
            (
                Category::Misc,
                &[
                    "Beach towel",
                    "Beach bag",
                    "Snorkel gear",
                    "Waterproof phone case",
                    "Book/magazine",
                ],
            ),
        ],
        TripType::Hiking => &[
            (
                Category::Clothing,
                &[
                    "Hiking boots",
                    "Moisture-wicking shirts",
                    "Hiking pants",
                    "Fleece jacket",
                    "Rain gear",
                    "Hiking socks",
                ],
            ),
            (
                Category::Misc,
                &[
                    "Backpack",
                    "First aid kit",
                    "Map/GPS",
                    "Flashlight",
                    "Multi-tool",
                    "Snacks",
                    "Water purification",
                    "Compass",
                ],
            ),
            (Category::Tech, &["GPS device", "Camera"]),
        ],
        TripType::City => &[
            (
                Category::Clothing,
                &[
                    "Comfortable walking shoes",
                    "Casual outfits",
                    "Light jacket",
                    "Stylish accessories",
                ],
            ),
            (
                Category::Misc,
                &[
                    "City map",
                    "Guidebook",
                    "Camera",
                    "Reusable shopping bag",
                    "Day backpack",
                    "Portable phone charger",
                ],
            ),
        ],
        TripType::Winter => &[
            (
                Category::Clothing,
                &[
                    "Thermal layers",
                    "Ski jacket",
                    "Snow pants",
                    "Winter boots",
                    "Warm hat",
                    "Gloves",
                    "Scarf",
                    "Wool socks",
                ],
            ),
            (
                Category::Misc,
                &[
                    "Ski goggles",
                    "Hand warmers",
                    "Thermos",
                    "Lip balm",
                    "Heavy moisturizer",
                ],
            ),
        ],
    }
}

/// Recommendations for a city, keyed by its lowercase name.
///
/// Unknown cities have no recommendations.
pub fn city_items(city: &str) -> &'static [&'static str] {
    match city {
        // Europe
        "paris" => &["Stylish walking shoes", "Scarf", "Museum pass", "Metro card"],
        "london" => &[
            "Umbrella",
            "Oyster card",
            "Layers for weather",
            "Comfortable walking shoes",
        ],
        "rome" => &[
            "Comfortable walking shoes",
            "Modest clothing for churches",
            "Hat",
            "Water bottle",
        ],
        "barcelona" => &["Beach gear", "Comfortable sandals", "Sunscreen", "Metro card"],
        "amsterdam" => &[
            "Rain jacket",
            "Comfortable walking shoes",
            "Bike lock",
            "Museum card",
        ],

        // Asia
        "tokyo" => &[
            "Comfortable walking shoes",
            "Cash (yen)",
            "Pocket WiFi",
            "IC card for trains",
        ],
        "bangkok" => &[
            "Light breathable clothing",
            "Modest temple wear",
            "Insect repellent",
            "Sunscreen",
        ],
        "singapore" => &[
            "Light clothing",
            "Umbrella",
            "Comfortable walking shoes",
            "EZ-Link card",
        ],
        "hong kong" => &["Layers", "Octopus card", "Comfortable shoes", "Umbrella"],
        "dubai" => &["Modest clothing", "Sunscreen", "Hat", "Light scarf"],

        // Americas
        "new york" => &["Comfortable walking shoes", "MetroCard", "Layers", "Backpack"],
        "los angeles" => &["Sunglasses", "Sunscreen", "Car essentials", "Light layers"],
        "san francisco" => &[
            "Layers",
            "Light jacket",
            "Comfortable walking shoes",
            "Clipper card",
        ],
        "chicago" => &[
            "Weather-appropriate layers",
            "Comfortable shoes",
            "Ventra card",
            "Wind-resistant jacket",
        ],
        "miami" => &["Beach gear", "Sunscreen", "Light clothing", "Sunglasses"],

        // Elsewhere
        "sydney" => &["Sunscreen", "Beach gear", "Opal card", "Hat"],
        "melbourne" => &["Layers", "Umbrella", "Comfortable shoes", "Myki card"],
        "toronto" => &["Weather layers", "Presto card", "Comfortable shoes", "Jacket"],
        "vancouver" => &["Rain jacket", "Layers", "Compass card", "Hiking gear"],

        _ => &[],
    }
}
