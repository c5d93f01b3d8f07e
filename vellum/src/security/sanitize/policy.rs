// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Hard cap applied to the strict tier after filtering and trimming.
pub(crate) const STRICT_MAX_CHARS: usize = 500;

/// Declarative per-tier rule set consumed by the filter engine. Everything
/// not listed is rejected by default. Tier policies are process-wide
/// constants; nothing mutates them after first use.
pub(crate) struct TierPolicy {
    allowed_tags: HashSet<&'static str>,
    allowed_attributes: HashMap<&'static str, HashSet<&'static str>>,
    allowed_schemes: HashSet<&'static str>,
    url_attributes: HashSet<&'static str>,
    pub(crate) rewrite_links: bool,
    pub(crate) max_output_chars: Option<usize>,
}

impl TierPolicy {
    pub(crate) fn is_tag_allowed(&self, name: &str) -> bool {
        self.allowed_tags.contains(name)
    }

    pub(crate) fn allowed_attributes_for(&self, tag: &str) -> Option<&HashSet<&'static str>> {
        self.allowed_attributes.get(tag)
    }

    pub(crate) fn is_scheme_allowed(&self, scheme: &str) -> bool {
        self.allowed_schemes.contains(scheme)
    }

    pub(crate) fn is_url_attribute(&self, name: &str) -> bool {
        self.url_attributes.contains(name)
    }
}

/// Tags whose content is not visible text. When one of these is outside the
/// allow-list it is removed whole instead of unwrapped, so script or style
/// source never leaks into the output as plain text.
pub(crate) static DISCARD_CONTENT_TAGS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["script", "style", "textarea", "option"].into_iter().collect());

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

const ANCHOR_ATTRIBUTES: &[&str] = &["href", "title", "target", "rel"];
const IMAGE_ATTRIBUTES: &[&str] = &["src", "alt", "width", "height"];

const BODY_TAGS: &[&str] = &[
    "b", "i", "em", "strong", "a", "p", "br", "ul", "ol", "li", "blockquote", "code", "pre", "h1",
    "h2", "h3", "h4", "h5", "h6", "img",
];

const COMMENT_TAGS: &[&str] = &["b", "i", "em", "strong", "u", "br", "a", "code", "p"];

fn tier(
    tags: &[&'static str],
    attributes: &[(&'static str, &'static [&'static str])],
    rewrite_links: bool,
    max_output_chars: Option<usize>,
) -> TierPolicy {
    TierPolicy {
        allowed_tags: tags.iter().copied().collect(),
        allowed_attributes: attributes
            .iter()
            .map(|(tag, names)| (*tag, names.iter().copied().collect()))
            .collect(),
        allowed_schemes: ALLOWED_SCHEMES.iter().copied().collect(),
        url_attributes: URL_ATTRIBUTES.iter().copied().collect(),
        rewrite_links,
        max_output_chars,
    }
}

/// Titles carry no markup at all.
pub(crate) static TITLE_POLICY: Lazy<TierPolicy> = Lazy::new(|| tier(&[], &[], false, None));

/// Article bodies: simple formatting, lists, quotes, code, headings, links
/// and images.
pub(crate) static BODY_POLICY: Lazy<TierPolicy> = Lazy::new(|| {
    tier(
        BODY_TAGS,
        &[("a", ANCHOR_ATTRIBUTES), ("img", IMAGE_ATTRIBUTES)],
        true,
        None,
    )
});

/// Comments: a minimal inline set, links included.
pub(crate) static COMMENT_POLICY: Lazy<TierPolicy> =
    Lazy::new(|| tier(COMMENT_TAGS, &[("a", ANCHOR_ATTRIBUTES)], true, None));

/// Generic untrusted strings: no markup, capped length.
pub(crate) static STRICT_POLICY: Lazy<TierPolicy> =
    Lazy::new(|| tier(&[], &[], false, Some(STRICT_MAX_CHARS)));
