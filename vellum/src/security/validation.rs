// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG_REGEX: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"<[^>]+>"));

/// Remove markup tags from already-sanitized text, leaving what a reader
/// actually sees. Used by the write paths to measure visible length; this is
/// not a sanitizer and must never be fed raw untrusted input directly.
pub fn strip_markup(text: &str) -> String {
    match MARKUP_TAG_REGEX.as_ref() {
        Ok(regex) => regex.replace_all(text, "").trim().to_string(),
        Err(_) => text.trim().to_string(),
    }
}

/// Number of visible characters after tags are stripped and the ends trimmed.
pub fn visible_char_count(text: &str) -> usize {
    strip_markup(text).chars().count()
}
