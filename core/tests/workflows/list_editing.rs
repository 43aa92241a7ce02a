// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Generating and editing the working list.

use packsmart_core::{Category, PackSmart, TripParams, TripType, Weather};

use crate::common::{setup_temp_dirs, test_config};

#[tokio::test]
async fn session_persists_across_instances() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(6, Weather::Cool, TripType::City))
        .await
        .unwrap();
    let checked = app.toggle_item("2").await.unwrap();
    let custom = app
        .add_custom_item("Travel pillow", Category::Misc)
        .await
        .unwrap();
    let expected = app.session().clone();
    app.close().await.unwrap();

    // Act
    let app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();

    // Assert
    assert!(checked);
    assert_eq!(app.session(), &expected);
    assert_eq!(app.session().items.find(&custom.id), Some(&custom));
}

#[tokio::test]
async fn regenerate_discards_edits() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    let params = TripParams::new(6, Weather::Cool, TripType::City);
    app.generate(params.clone()).await.unwrap();
    app.toggle_item("1").await.unwrap();
    app.add_custom_item("Travel pillow", Category::Misc)
        .await
        .unwrap();

    app.generate(params).await.unwrap();

    assert_eq!(app.session().items.progress().0, 0);
    assert!(!app.session().items.items().iter().any(|a| a.is_custom));
}

#[tokio::test]
async fn toggle_twice_restores_state() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();
    let id = app.session().items.items()[0].id.clone();

    assert!(app.toggle_item(&id).await.unwrap());
    assert!(!app.toggle_item(&id).await.unwrap());
    assert_eq!(app.session().items.progress().0, 0);
}

#[tokio::test]
async fn uncheck_clears_checked_items() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();
    let refs = vec!["1".to_string(), "2".to_string()];
    app.check_items(&refs, true).await.unwrap();

    app.check_items(&refs, false).await.unwrap();

    assert_eq!(app.session().items.progress().0, 0);
}

#[tokio::test]
async fn custom_items_require_a_list_and_a_name() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();

    let before_generate = app.add_custom_item("Pillow", Category::Misc).await;
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();
    let len = app.session().items.len();
    let blank = app.add_custom_item("  ", Category::Misc).await;

    assert!(before_generate.is_err());
    assert!(blank.is_err());
    assert_eq!(app.session().items.len(), len);
}

#[tokio::test]
async fn only_custom_items_can_be_removed() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();
    let custom = app
        .add_custom_item("Snorkel mask", Category::Misc)
        .await
        .unwrap();
    let len = app.session().items.len();

    let generated = app.delete_custom_item("1").await;
    let removed = app.delete_custom_item(&custom.id).await.unwrap();

    assert!(generated.is_err());
    assert_eq!(removed, custom);
    assert_eq!(app.session().items.len(), len - 1);
}

#[tokio::test]
async fn unknown_item_reference_is_an_error() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();

    assert!(app.toggle_item("0").await.is_err());
    assert!(app.toggle_item("9999").await.is_err());
    assert!(app.toggle_item("no-such-id").await.is_err());
}

#[tokio::test]
async fn failed_batch_removal_keeps_every_item() {
    // Arrange
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(3, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let kite = app.add_custom_item("Kite", Category::Misc).await.unwrap();
    let expected = app.session().clone();

    // Act
    let result = app
        .delete_custom_items(&[kite.id.clone(), "1".to_string()])
        .await;

    // Assert
    assert!(result.is_err());
    assert_eq!(app.session(), &expected);
    let reopened = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    assert_eq!(reopened.session(), &expected);
}

#[tokio::test]
async fn batch_removal_resolves_positions_before_removing() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(3, Weather::Warm, TripType::City))
        .await
        .unwrap();
    let len = app.session().items.len();
    let kite = app.add_custom_item("Kite", Category::Misc).await.unwrap();
    let towel = app.add_custom_item("Towel", Category::Misc).await.unwrap();

    // Positions of the two custom items, which shift after the first removal
    let refs = vec![(len + 1).to_string(), (len + 2).to_string()];
    let removed = app.delete_custom_items(&refs).await.unwrap();

    assert_eq!(removed, vec![kite, towel]);
    assert_eq!(app.session().items.len(), len);
}

#[tokio::test]
async fn failed_batch_toggle_changes_nothing() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();

    let result = app
        .toggle_items(&["1".to_string(), "no-such-id".to_string()])
        .await;
    let reopened = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();

    assert!(result.is_err());
    assert_eq!(app.session().items.progress().0, 0);
    assert_eq!(reopened.session().items.progress().0, 0);
}

#[tokio::test]
async fn batch_toggle_returns_new_states() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut app = PackSmart::new(test_config(&dirs.state_dir)).await.unwrap();
    app.generate(TripParams::new(2, Weather::Hot, TripType::Beach))
        .await
        .unwrap();
    app.check_items(&["2".to_string()], true).await.unwrap();

    let states = app
        .toggle_items(&["1".to_string(), "2".to_string()])
        .await
        .unwrap();

    assert_eq!(states, vec![true, false]);
    assert_eq!(app.session().items.progress().0, 1);
}
