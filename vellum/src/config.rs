// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};

/// Minimum lengths enforced on the content write paths.
///
/// These are caller-side policy thresholds layered on top of sanitizer
/// output; the sanitizer itself never rejects anything.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ContentLimits {
    #[serde(default = "default_min_title_chars")]
    pub min_title_chars: usize,
    #[serde(default = "default_min_content_chars")]
    pub min_content_chars: usize,
    /// Counted on visible characters (markup stripped), not raw input.
    #[serde(default = "default_min_comment_chars")]
    pub min_comment_chars: usize,
}

fn default_min_title_chars() -> usize {
    5
}

fn default_min_content_chars() -> usize {
    20
}

fn default_min_comment_chars() -> usize {
    6
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            min_title_chars: default_min_title_chars(),
            min_content_chars: default_min_content_chars(),
            min_comment_chars: default_min_comment_chars(),
        }
    }
}
