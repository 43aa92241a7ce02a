// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::tables::{
    BASE_ITEMS, INTERNATIONAL_ITEMS, ItemTable, city_items, trip_type_items, weather_items,
};
use crate::{Category, ItemName, PackingItem, PackingList, PackingStyle, TravelType, TripParams};

/// Generate a packing list for the given trip.
///
/// Tables are emitted in order: base, international add-ons, weather, trip type,
/// then city recommendations. Duplicates by (name, category) keep their first
/// occurrence. An empty list is a valid result.
#[tracing::instrument(level = "debug")]
pub fn generate(params: &TripParams) -> PackingList {
    let mut items = Vec::new();

    emit_table(&mut items, BASE_ITEMS, params);

    if params.travel_type == TravelType::International {
        emit_table(&mut items, INTERNATIONAL_ITEMS, params);
    }

    emit_table(&mut items, weather_items(params.weather), params);
    emit_table(&mut items, trip_type_items(params.trip_type), params);

    if let Some(city) = params.city_for_lookup() {
        let recommendations = city_items(&city);
        if recommendations.is_empty() {
            tracing::debug!(city, "no recommendations for city");
        }
        for name in recommendations {
            items.push(PackingItem::new(ItemName::new(*name), Category::Misc));
        }
    }

    let items = dedup_items(items);
    tracing::debug!(count = items.len(), "generated packing list");
    items.into()
}

/// Keep the leading share of a list that fits the packing style.
///
/// Light keeps the first 60% (rounded up), normal 80%, heavy everything.
pub fn filter_by_packing_style<T>(items: &[T], style: PackingStyle) -> &[T] {
    let len = items.len();
    let keep = match style {
        PackingStyle::Light => (len * 3).div_ceil(5),
        PackingStyle::Normal => (len * 4).div_ceil(5),
        PackingStyle::Heavy => len,
    };
    &items[..keep]
}

fn emit_table(items: &mut Vec<PackingItem>, table: ItemTable, params: &TripParams) {
    for (category, names) in table {
        for name in filter_by_packing_style(names, params.packing_style) {
            let name = match category {
                Category::Clothing => ItemName::clothing(name, params.days, params.packing_style),
                _ => ItemName::new(*name),
            };
            items.push(PackingItem::new(name, *category));
        }
    }
}

fn dedup_items(items: Vec<PackingItem>) -> Vec<PackingItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|a| seen.insert((a.display_name(), a.category)))
        .collect()
}
