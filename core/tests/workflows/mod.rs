// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows driven through [`packsmart_core::PackSmart`], backed by a
//! temporary state directory.

mod list_editing;
mod template_lifecycle;
