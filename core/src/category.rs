// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;

use crate::{Category, PackingItem};

/// Human-readable label for a category key such as `travelDocs`.
///
/// Unknown keys are returned unchanged.
pub fn category_display_name(key: &str) -> Cow<'_, str> {
    match key.parse::<Category>() {
        Ok(category) => category.display_name().into(),
        Err(()) => key.into(),
    }
}

/// Partition items by category.
///
/// Buckets appear in the order their category is first seen, and items keep
/// their relative order within a bucket.
pub fn group_items_by_category(items: &[PackingItem]) -> Vec<(Category, Vec<&PackingItem>)> {
    let mut groups: Vec<(Category, Vec<&PackingItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((item.category, vec![item])),
        }
    }
    groups
}
