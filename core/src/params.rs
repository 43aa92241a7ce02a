// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use jiff::civil::Date;

use crate::{PackingStyle, TravelType, TripType, Weather};

/// Trip length used when the given duration is not a positive number.
pub const DEFAULT_DAYS: u32 = 7;

/// Parameters describing a trip, used to select the item tables.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParams {
    /// Length of the trip in days, at least 1.
    pub days: u32,

    /// Expected weather.
    pub weather: Weather,

    /// Kind of trip.
    pub trip_type: TripType,

    /// Local or international.
    #[serde(default)]
    pub travel_type: TravelType,

    /// How much to pack.
    #[serde(default)]
    pub packing_style: PackingStyle,

    /// Destination city, only used for city trips.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// First day of the trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Last day of the trip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
}

impl TripParams {
    /// Create parameters with local travel, normal packing and no city.
    pub fn new(days: u32, weather: Weather, trip_type: TripType) -> Self {
        Self {
            days: days.max(1),
            weather,
            trip_type,
            travel_type: TravelType::default(),
            packing_style: PackingStyle::default(),
            city: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Coerce free-form user input into a trip length.
    ///
    /// The leading digits are read, so "10 days" is 10 and "3.5" is 3. Input
    /// without a positive leading integer falls back to [`DEFAULT_DAYS`].
    pub fn parse_days(input: &str) -> u32 {
        let input = input.trim();
        let digits = input
            .find(|c: char| !c.is_ascii_digit())
            .map_or(input, |end| &input[..end]);
        match digits.parse::<u32>() {
            Ok(days) if days > 0 => days,
            _ => {
                tracing::debug!(input, default = DEFAULT_DAYS, "invalid trip length, using default");
                DEFAULT_DAYS
            }
        }
    }

    /// Number of days between two dates, in either order.
    pub fn days_between(start: Date, end: Date) -> Result<u32, Box<dyn Error>> {
        let span = start
            .until(end)
            .map_err(|e| format!("Failed to compute trip length: {e}"))?;

        match span.get_days().unsigned_abs() {
            0 => Ok(DEFAULT_DAYS),
            days => Ok(days),
        }
    }

    /// Set both dates and derive the trip length from them.
    pub fn with_dates(mut self, start: Date, end: Date) -> Result<Self, Box<dyn Error>> {
        self.days = Self::days_between(start, end)?;
        self.start_date = Some(start);
        self.end_date = Some(end);
        Ok(self)
    }

    /// The normalized city to look up, if this is a city trip with a city set.
    pub fn city_for_lookup(&self) -> Option<String> {
        if self.trip_type != TripType::City {
            return None;
        }

        self.city
            .as_deref()
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
    }
}
