// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use jiff::civil::Date;
use packsmart_core::{
    DEFAULT_DAYS, PackSmart, PackingStyle, TravelType, TripParams, TripType, Weather,
};

use crate::cmd_list::print_list;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdGenerate {
    pub days: Option<String>,
    pub weather: Weather,
    pub trip_type: TripType,
    pub travel_type: Option<TravelType>,
    pub packing_style: Option<PackingStyle>,
    pub city: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub output_format: ArgOutputFormat,
}

impl CmdGenerate {
    pub const NAME: &str = "generate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("gen")
            .about("Generate a new packing list, replacing the current one")
            .arg(arg!(-d --days <DAYS> "Length of the trip in days").long_help(
                "Length of the trip in days. Anything that is not a positive number means 7 days. \
Ignored when both --start-date and --end-date are given.",
            ))
            .arg(
                arg!(-w --weather <WEATHER> "Expected weather")
                    .value_parser(value_parser!(Weather))
                    .required(true),
            )
            .arg(
                arg!(-t --"trip-type" <TRIP_TYPE> "Kind of trip")
                    .value_parser(value_parser!(TripType))
                    .required(true),
            )
            .arg(
                arg!(--"travel-type" <TRAVEL_TYPE> "Local or international travel")
                    .value_parser(value_parser!(TravelType)),
            )
            .arg(
                arg!(-s --"packing-style" <PACKING_STYLE> "How much to pack")
                    .value_parser(value_parser!(PackingStyle)),
            )
            .arg(arg!(--city <CITY> "Destination city, used for city trips"))
            .arg(
                arg!(--"start-date" <DATE> "First day of the trip, as YYYY-MM-DD")
                    .value_parser(value_parser!(Date))
                    .requires("end-date"),
            )
            .arg(
                arg!(--"end-date" <DATE> "Last day of the trip, as YYYY-MM-DD")
                    .value_parser(value_parser!(Date))
                    .requires("start-date"),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let (Some(weather), Some(trip_type)) = (
            matches.get_one::<Weather>("weather").copied(),
            matches.get_one::<TripType>("trip-type").copied(),
        ) else {
            unreachable!()
        };

        Self {
            days: matches.get_one("days").cloned(),
            weather,
            trip_type,
            travel_type: matches.get_one("travel-type").copied(),
            packing_style: matches.get_one("packing-style").copied(),
            city: matches.get_one("city").cloned(),
            start_date: matches.get_one("start-date").copied(),
            end_date: matches.get_one("end-date").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// Resolve the trip parameters, filling gaps from the configuration.
    pub fn params(&self, app: &PackSmart) -> Result<TripParams, Box<dyn Error>> {
        let days = match &self.days {
            Some(days) => TripParams::parse_days(days),
            None => DEFAULT_DAYS,
        };

        let config = app.config();
        let params = TripParams {
            travel_type: self.travel_type.unwrap_or(config.default_travel_type),
            packing_style: self.packing_style.unwrap_or(config.default_packing_style),
            city: self.city.clone(),
            ..TripParams::new(days, self.weather, self.trip_type)
        };

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => params.with_dates(start, end),
            _ => Ok(params),
        }
    }

    pub async fn run(self, app: &mut PackSmart) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating packing list...");
        let params = self.params(app)?;
        app.generate(params).await?;
        print_list(app, self.output_format);
        Ok(())
    }
}
