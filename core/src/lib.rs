// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! PackSmart core: packing-list generation, editing and templates.

mod category;
mod config;
mod generator;
mod item;
mod packsmart;
mod params;
mod quantity;
mod storage;
mod tables;
mod template;
mod types;

pub use crate::category::{category_display_name, group_items_by_category};
pub use crate::config::{APP_NAME, Config};
pub use crate::generator::{filter_by_packing_style, generate};
pub use crate::item::{PackingItem, PackingList};
pub use crate::packsmart::PackSmart;
pub use crate::params::{DEFAULT_DAYS, TripParams};
pub use crate::quantity::{ItemName, clothing_quantity};
pub use crate::storage::{Session, SessionStore, TemplateStore};
pub use crate::template::TripTemplate;
pub use crate::types::{Category, PackingStyle, TravelType, TripType, Weather};
