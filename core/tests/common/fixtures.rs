// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::collections::HashSet;
use std::path::Path;

use packsmart_core::{
    Category, Config, PackingList, PackingStyle, TravelType, TripParams, TripType, Weather,
};

const WEATHERS: [Weather; 5] = [
    Weather::Hot,
    Weather::Warm,
    Weather::Cool,
    Weather::Cold,
    Weather::Rainy,
];

const TRIP_TYPES: [TripType; 5] = [
    TripType::Business,
    TripType::Beach,
    TripType::Hiking,
    TripType::City,
    TripType::Winter,
];

const TRAVEL_TYPES: [TravelType; 2] = [TravelType::Local, TravelType::International];

const PACKING_STYLES: [PackingStyle; 3] =
    [PackingStyle::Light, PackingStyle::Normal, PackingStyle::Heavy];

/// Creates a configuration storing its state in the given directory.
#[must_use]
pub fn test_config(state_dir: &Path) -> Config {
    Config {
        state_dir: Some(state_dir.to_path_buf()),
        ..Default::default()
    }
}

/// Creates trip parameters with every enum set explicitly.
///
/// # Example
///
/// ```ignore
/// let params = trip(7, Weather::Warm, TripType::City, TravelType::Local, PackingStyle::Normal);
/// ```
#[must_use]
pub fn trip(
    days: u32,
    weather: Weather,
    trip_type: TripType,
    travel_type: TravelType,
    packing_style: PackingStyle,
) -> TripParams {
    TripParams {
        travel_type,
        packing_style,
        ..TripParams::new(days, weather, trip_type)
    }
}

/// Every combination of enums, for a handful of trip lengths.
#[must_use]
pub fn all_trip_params() -> Vec<TripParams> {
    let mut all = Vec::new();
    for days in [1, 3, 7, 14, 30] {
        for weather in WEATHERS {
            for trip_type in TRIP_TYPES {
                for travel_type in TRAVEL_TYPES {
                    for style in PACKING_STYLES {
                        all.push(trip(days, weather, trip_type, travel_type, style));
                    }
                }
            }
        }
    }
    all
}

/// The (base name, category) pairs of a list, ignoring quantities.
#[must_use]
pub fn base_names(list: &PackingList) -> HashSet<(String, Category)> {
    list.items()
        .iter()
        .map(|a| (a.name.base.clone(), a.category))
        .collect()
}
