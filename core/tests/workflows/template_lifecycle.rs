// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Saving, listing, loading and deleting templates.

use packsmart_core::{
    Category, PackSmart, PackingStyle, TemplateStore, TravelType, TripParams, TripType, Weather,
};

use crate::common::{setup_temp_dirs, test_config, trip};

#[tokio::test]
async fn save_then_load_restores_list_and_checked_state() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    let mut params = trip(
        4,
        Weather::Warm,
        TripType::City,
        TravelType::International,
        PackingStyle::Normal,
    );
    params.city = Some("Tokyo".to_string());
    app.generate(params.clone()).await.unwrap();
    app.check_items(&["1".to_string(), "3".to_string()], true)
        .await
        .unwrap();
    app.add_custom_item("Camera lens", Category::Tech)
        .await
        .unwrap();
    let edited = app.session().items.clone();

    // Act
    let saved = app.save_template("  Tokyo spring  ").await.unwrap();
    app.generate(TripParams::new(2, Weather::Cold, TripType::Winter))
        .await
        .unwrap();
    let loaded = app.load_template(&saved.id).await.unwrap();

    // Assert
    assert_eq!(saved.name, "Tokyo spring");
    assert_eq!(loaded, saved);
    assert_eq!(app.session().items, edited);
    assert_eq!(app.session().params.as_ref(), Some(&params));
    assert_eq!(app.session().items.progress().0, 2);
}

#[tokio::test]
async fn load_by_name_replaces_working_list() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    let beach = TripParams::new(3, Weather::Hot, TripType::Beach);
    app.generate(beach.clone()).await.unwrap();
    app.save_template("Beach").await.unwrap();
    app.generate(TripParams::new(9, Weather::Cool, TripType::Business))
        .await
        .unwrap();

    app.load_template("Beach").await.unwrap();

    assert_eq!(app.session().params, Some(beach));
    assert!(
        app.session()
            .items
            .items()
            .iter()
            .any(|a| a.name.base == "Beach towel")
    );
    assert!(
        !app.session()
            .items
            .items()
            .iter()
            .any(|a| a.name.base == "Laptop")
    );
}

#[tokio::test]
async fn templates_are_listed_in_save_order_and_survive_restart() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(3, Weather::Rainy, TripType::Hiking))
        .await
        .unwrap();
    app.save_template("First").await.unwrap();
    app.save_template("Second").await.unwrap();
    app.close().await.unwrap();

    let app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    let names: Vec<_> = app
        .list_templates()
        .await
        .into_iter()
        .map(|a| a.name)
        .collect();

    assert_eq!(names, ["First", "Second"]);
}

#[tokio::test]
async fn delete_unknown_id_keeps_templates() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(5, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let kept = app.save_template("Keep").await.unwrap();

    let deleted = app.delete_template("no-such-id").await.unwrap();

    assert!(!deleted);
    assert_eq!(app.list_templates().await, vec![kept]);
}

#[tokio::test]
async fn delete_removes_template_by_id() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(5, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let first = app.save_template("First").await.unwrap();
    let second = app.save_template("Second").await.unwrap();

    let deleted = app.delete_template(&first.id).await.unwrap();

    assert!(deleted);
    assert_eq!(app.list_templates().await, vec![second]);
}

#[tokio::test]
async fn save_requires_name_and_list() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();

    let no_list = app.save_template("Empty").await;
    app.generate(TripParams::new(5, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let blank_name = app.save_template("   ").await;

    assert_eq!(
        no_list.unwrap_err().to_string(),
        "Generate a packing list first"
    );
    assert_eq!(
        blank_name.unwrap_err().to_string(),
        "Please enter a template name"
    );
    assert!(app.list_templates().await.is_empty());
}

#[tokio::test]
async fn load_unknown_template_leaves_session_untouched() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(5, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let before = app.session().clone();

    let result = app.load_template("Missing").await;

    assert!(result.is_err());
    assert_eq!(app.session(), &before);
}

#[tokio::test]
async fn corrupt_template_file_reads_as_empty() {
    let dirs = setup_temp_dirs().await.unwrap();
    let store = TemplateStore::new(&dirs.state_dir);
    tokio::fs::write(store.path(), "[{\"id\": 1")
        .await
        .unwrap();

    let app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();

    assert!(app.list_templates().await.is_empty());
}

#[tokio::test]
async fn saved_template_keeps_city_only_for_city_trips() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    let mut params = TripParams::new(5, Weather::Hot, TripType::Beach);
    params.city = Some("Paris".to_string());
    app.generate(params).await.unwrap();

    let saved = app.save_template("Beach").await.unwrap();

    assert_eq!(saved.params.city, None);
    assert_eq!(app.list_templates().await[0].params.city, None);
}
