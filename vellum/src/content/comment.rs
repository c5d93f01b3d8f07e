// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::debug;

use crate::config::ContentLimits;
use crate::content::ContentError;
use crate::security::{sanitize_comment, strip_markup};

/// Validate and sanitize a comment submission, returning the sanitized text
/// ready for persistence.
///
/// The minimum length applies to visible characters: tags are stripped from
/// the sanitized result before counting, so `<b></b>` padding or a link
/// whose unsafe target was filtered away cannot satisfy it.
pub fn prepare_comment(
    text: Option<&str>,
    limits: &ContentLimits,
) -> Result<String, ContentError> {
    let raw = text.unwrap_or("");
    if raw.trim().is_empty() {
        return Err(ContentError::Required("comment"));
    }

    let sanitized = sanitize_comment(Some(raw));

    let plain = strip_markup(&sanitized);
    if plain.is_empty() {
        debug!("comment rejected: empty after filtering");
        return Err(ContentError::EmptyAfterFiltering("comment"));
    }
    let visible = plain.chars().count();
    if visible < limits.min_comment_chars {
        debug!(
            "comment rejected: {} visible chars, minimum {}",
            visible, limits.min_comment_chars
        );
        return Err(ContentError::TooShort {
            field: "comment",
            min: limits.min_comment_chars,
        });
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ContentLimits {
        ContentLimits::default()
    }

    #[test]
    fn accepts_a_valid_comment_and_keeps_safe_markup() {
        let text = prepare_comment(Some("This is <b>fine</b> by me"), &limits())
            .expect("valid comment");
        assert_eq!(text, "This is <b>fine</b> by me");
    }

    #[test]
    fn empty_and_absent_comments_are_required() {
        assert_eq!(prepare_comment(None, &limits()), Err(ContentError::Required("comment")));
        assert_eq!(
            prepare_comment(Some("   "), &limits()),
            Err(ContentError::Required("comment"))
        );
    }

    #[test]
    fn comment_that_filters_to_nothing_is_rejected() {
        // The whole anchor is removed for its scheme, leaving nothing visible.
        let result = prepare_comment(
            Some(r#"<a href="javascript:alert(1)">click here please</a>"#),
            &limits(),
        );
        assert_eq!(result, Err(ContentError::EmptyAfterFiltering("comment")));

        let result = prepare_comment(Some("<b></b>"), &limits());
        assert_eq!(result, Err(ContentError::EmptyAfterFiltering("comment")));
    }

    #[test]
    fn visible_length_minimum_applies_after_stripping() {
        assert_eq!(
            prepare_comment(Some("hi"), &limits()),
            Err(ContentError::TooShort { field: "comment", min: 6 })
        );
        // Tag characters do not count toward the minimum.
        assert_eq!(
            prepare_comment(Some("<b><i>abc</i></b>"), &limits()),
            Err(ContentError::TooShort { field: "comment", min: 6 })
        );
    }

    #[test]
    fn configured_minimum_is_respected() {
        let relaxed = ContentLimits {
            min_comment_chars: 2,
            ..ContentLimits::default()
        };
        assert_eq!(prepare_comment(Some("ok"), &relaxed), Ok("ok".to_string()));
    }
}
