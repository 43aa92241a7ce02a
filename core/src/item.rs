// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use uuid::Uuid;

use crate::{Category, ItemName};

const CUSTOM_ID_PREFIX: &str = "custom-";

/// An entry of a packing list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingItem {
    /// Unique identifier, assigned on creation.
    pub id: String,

    /// The name, with quantity when the item scales with the trip length.
    #[serde(flatten)]
    pub name: ItemName,

    /// The category of the item.
    pub category: Category,

    /// Whether the item is already packed.
    pub checked: bool,

    /// Whether the item was added by the user.
    #[serde(default)]
    pub is_custom: bool,
}

impl PackingItem {
    /// Create an unchecked generated item with a fresh id.
    pub fn new(name: ItemName, category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            category,
            checked: false,
            is_custom: false,
        }
    }

    /// Create an unchecked user-defined item.
    pub fn custom(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: format!("{CUSTOM_ID_PREFIX}{}", Uuid::new_v4()),
            name: ItemName::new(name),
            category,
            checked: false,
            is_custom: true,
        }
    }

    /// The name as shown to the user, e.g. "Socks (8)".
    pub fn display_name(&self) -> String {
        self.name.to_string()
    }
}

/// An ordered packing list, as generated and then edited by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PackingList {
    items: Vec<PackingItem>,
}

impl PackingList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The items, in list order.
    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes the list, returning its items.
    pub fn into_items(self) -> Vec<PackingItem> {
        self.items
    }

    /// Find an item by its 1-based position in the list or by its id.
    pub fn find(&self, reference: &str) -> Option<&PackingItem> {
        self.position(reference).map(|i| &self.items[i])
    }

    /// Number of checked items and total number of items.
    pub fn progress(&self) -> (usize, usize) {
        let checked = self.items.iter().filter(|a| a.checked).count();
        (checked, self.items.len())
    }

    /// Flip the checked state of an item, returning the new state.
    pub fn toggle_checked(&mut self, reference: &str) -> Result<bool, Box<dyn Error>> {
        let item = self.get_mut(reference)?;
        item.checked = !item.checked;
        Ok(item.checked)
    }

    /// Set the checked state of an item.
    pub fn set_checked(&mut self, reference: &str, checked: bool) -> Result<(), Box<dyn Error>> {
        self.get_mut(reference)?.checked = checked;
        Ok(())
    }

    /// Append a user-defined item.
    ///
    /// A list has to be generated first, and the name must not be blank.
    pub fn add_custom_item(
        &mut self,
        name: &str,
        category: Category,
    ) -> Result<&PackingItem, Box<dyn Error>> {
        if name.trim().is_empty() {
            return Err("Please enter an item name".into());
        } else if self.items.is_empty() {
            return Err("Generate a packing list first".into());
        }

        self.items.push(PackingItem::custom(name, category));
        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove a user-defined item. Generated items cannot be removed.
    pub fn delete_custom_item(&mut self, reference: &str) -> Result<PackingItem, Box<dyn Error>> {
        let index = self
            .position(reference)
            .ok_or_else(|| format!("Item not found: {reference}"))?;

        if !self.items[index].is_custom {
            return Err(format!(
                "Only custom items can be removed: {}",
                self.items[index].display_name()
            )
            .into());
        }

        Ok(self.items.remove(index))
    }

    fn get_mut(&mut self, reference: &str) -> Result<&mut PackingItem, Box<dyn Error>> {
        match self.position(reference) {
            Some(index) => Ok(&mut self.items[index]),
            None => Err(format!("Item not found: {reference}").into()),
        }
    }

    fn position(&self, reference: &str) -> Option<usize> {
        match reference.parse::<usize>() {
            Ok(n) if (1..=self.items.len()).contains(&n) => Some(n - 1),
            _ => self.items.iter().position(|a| a.id == reference),
        }
    }
}

impl From<Vec<PackingItem>> for PackingList {
    fn from(items: Vec<PackingItem>) -> Self {
        Self { items }
    }
}
