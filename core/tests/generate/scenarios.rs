// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Concrete trips and the items they must or must not contain.

use packsmart_core::{
    Category, PackingList, PackingStyle, TravelType, TripParams, TripType, Weather, generate,
};

use crate::common::trip;

fn has(list: &PackingList, name: &str, category: Category) -> bool {
    list.items()
        .iter()
        .any(|a| a.display_name() == name && a.category == category)
}

fn count_category(list: &PackingList, category: Category) -> usize {
    list.items().iter().filter(|a| a.category == category).count()
}

#[test]
fn week_in_a_warm_city_packs_eight_socks() {
    let params = trip(
        7,
        Weather::Warm,
        TripType::City,
        TravelType::Local,
        PackingStyle::Normal,
    );
    let list = generate(&params);

    assert!(has(&list, "Socks (8)", Category::Clothing));
    assert!(has(&list, "T-shirts (5)", Category::Clothing));
}

#[test]
fn light_beach_weekend_packs_two_t_shirts_and_no_visa() {
    let params = trip(
        3,
        Weather::Hot,
        TripType::Beach,
        TravelType::Local,
        PackingStyle::Light,
    );
    let list = generate(&params);

    assert!(has(&list, "T-shirts (2)", Category::Clothing));
    assert!(!list.items().iter().any(|a| a.name.base == "Visa documents"));
    assert!(!list.items().iter().any(|a| a.name.base == "Passport"));
}

#[test]
fn international_trip_adds_documents() {
    let params = trip(
        10,
        Weather::Cool,
        TripType::Business,
        TravelType::International,
        PackingStyle::Heavy,
    );
    let list = generate(&params);

    assert!(has(&list, "Passport", Category::TravelDocs));
    assert!(has(&list, "Visa documents", Category::TravelDocs));
    assert!(has(&list, "Universal power adapter", Category::Tech));
    assert!(has(&list, "International SIM card", Category::Misc));
}

#[test]
fn known_city_adds_recommendations_as_misc() {
    let mut params = TripParams::new(4, Weather::Warm, TripType::City);
    params.city = Some(" PARIS ".to_string());
    let list = generate(&params);

    assert!(has(&list, "Museum pass", Category::Misc));
    assert!(has(&list, "Metro card", Category::Misc));
}

#[test]
fn unknown_city_adds_nothing() {
    let without_city = TripParams::new(4, Weather::Warm, TripType::City);
    let with_city = TripParams {
        city: Some("Nowhereville".to_string()),
        ..without_city.clone()
    };

    let expected = generate(&without_city);
    let actual = generate(&with_city);

    assert_eq!(
        count_category(&actual, Category::Misc),
        count_category(&expected, Category::Misc)
    );
    assert_eq!(actual.len(), expected.len());
}

#[test]
fn city_is_ignored_for_other_trip_types() {
    let mut params = TripParams::new(4, Weather::Warm, TripType::Beach);
    params.city = Some("Paris".to_string());
    let list = generate(&params);

    assert!(!list.items().iter().any(|a| a.name.base == "Museum pass"));
}

#[test]
fn light_style_shortens_every_table() {
    let normal = generate(&trip(
        5,
        Weather::Cold,
        TripType::Winter,
        TravelType::International,
        PackingStyle::Normal,
    ));
    let light = generate(&trip(
        5,
        Weather::Cold,
        TripType::Winter,
        TravelType::International,
        PackingStyle::Light,
    ));

    assert!(light.len() < normal.len());
    // ceil(60% of 6 toiletries)
    assert_eq!(count_category(&light, Category::Toiletries), 4);
    // ceil(80% of 6 toiletries)
    assert_eq!(count_category(&normal, Category::Toiletries), 5);
}

#[test]
fn heavy_style_scales_daily_items_up_to_twelve() {
    let params = trip(
        20,
        Weather::Rainy,
        TripType::Hiking,
        TravelType::Local,
        PackingStyle::Heavy,
    );
    let list = generate(&params);

    assert!(has(&list, "Underwear (12)", Category::Clothing));
    assert!(has(&list, "Socks (12)", Category::Clothing));
    // Keywords are case-sensitive: "Extra socks" is not a daily item.
    assert!(has(&list, "Extra socks", Category::Clothing));
}

#[test]
fn one_day_trip_still_packs_clothes() {
    let params = trip(
        1,
        Weather::Hot,
        TripType::Beach,
        TravelType::Local,
        PackingStyle::Light,
    );
    let list = generate(&params);

    assert!(has(&list, "Underwear (2)", Category::Clothing));
    assert!(has(&list, "T-shirts (2)", Category::Clothing));
    assert!(has(&list, "Shorts (2)", Category::Clothing));
}
