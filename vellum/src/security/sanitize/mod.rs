// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod dom;
mod filter;
mod parser;
mod policy;
mod serializer;

use once_cell::sync::Lazy;

use filter::apply_policy;
use parser::parse_fragment;
use policy::{BODY_POLICY, COMMENT_POLICY, STRICT_POLICY, TITLE_POLICY, TierPolicy};
use serializer::serialize_nodes;

/// Sanitizer bound to one trust tier.
///
/// The four tiers are process-wide constants; a `TierSanitizer` is a cheap
/// handle onto one of them. `clean` never fails for any input: absent input
/// coerces to the empty string, malformed markup degrades best-effort, and
/// the result is always a trimmed string.
pub struct TierSanitizer {
    policy: &'static TierPolicy,
}

impl TierSanitizer {
    /// Article titles: no markup survives.
    pub fn title() -> Self {
        Self {
            policy: Lazy::force(&TITLE_POLICY),
        }
    }

    /// Article bodies: rich formatting, links and images.
    pub fn body() -> Self {
        Self {
            policy: Lazy::force(&BODY_POLICY),
        }
    }

    /// Comments: minimal inline formatting and links.
    pub fn comment() -> Self {
        Self {
            policy: Lazy::force(&COMMENT_POLICY),
        }
    }

    /// Generic untrusted strings: no markup, result capped at 500 characters.
    pub fn strict() -> Self {
        Self {
            policy: Lazy::force(&STRICT_POLICY),
        }
    }

    pub fn clean(&self, input: Option<&str>) -> String {
        let raw = input.unwrap_or("");
        let tree = parse_fragment(raw);
        let filtered = apply_policy(tree, self.policy);
        let serialized = serialize_nodes(&filtered);
        let trimmed = serialized.trim();
        match self.policy.max_output_chars {
            Some(limit) => truncate_chars(trimmed, limit),
            None => trimmed.to_string(),
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}

/// Sanitize an article title: every tag is stripped, text content kept.
pub fn sanitize_title(input: Option<&str>) -> String {
    TierSanitizer::title().clean(input)
}

/// Sanitize article body markup against the rich-content allow-list.
pub fn sanitize_body(input: Option<&str>) -> String {
    TierSanitizer::body().clean(input)
}

/// Sanitize comment markup against the minimal inline allow-list.
pub fn sanitize_comment(input: Option<&str>) -> String {
    TierSanitizer::comment().clean(input)
}

/// Strip all markup and cap the result at 500 characters.
pub fn sanitize_strict(input: Option<&str>) -> String {
    TierSanitizer::strict().clean(input)
}
