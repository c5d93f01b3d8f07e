// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod sanitize;
mod validation;

pub use sanitize::{
    TierSanitizer, sanitize_body, sanitize_comment, sanitize_strict, sanitize_title,
};
pub use validation::{strip_markup, visible_char_count};
