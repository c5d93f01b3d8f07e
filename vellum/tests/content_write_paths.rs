// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use vellum::config::ContentLimits;
use vellum::content::{ContentError, prepare_article, prepare_article_update, prepare_comment};
use vellum::security::visible_char_count;

fn limits() -> ContentLimits {
    ContentLimits::default()
}

#[test]
fn article_round_trip_sanitizes_both_fields() {
    let draft = prepare_article(
        Some("  <em>Quarterly</em> report  "),
        Some(r#"<p>Numbers are up.</p><script>alert(1)</script><a href="https://example.com">source</a>"#),
        &limits(),
    )
    .expect("valid article");

    assert_eq!(draft.title, "Quarterly report");
    assert!(draft.content.contains("<p>Numbers are up.</p>"));
    assert!(!draft.content.contains("script"));
    assert!(draft.content.contains(r#"rel="noopener noreferrer nofollow ugc""#));
}

#[test]
fn article_field_requirements() {
    let long_content = "Content that is certainly long enough.";
    assert_eq!(
        prepare_article(None, Some(long_content), &limits()),
        Err(ContentError::Required("title"))
    );
    assert_eq!(
        prepare_article(Some("Good title"), None, &limits()),
        Err(ContentError::Required("content"))
    );
    assert_eq!(
        prepare_article(Some("abc"), Some(long_content), &limits()),
        Err(ContentError::TooShort { field: "title", min: 5 })
    );
    assert_eq!(
        prepare_article(Some("Good title"), Some("short"), &limits()),
        Err(ContentError::TooShort { field: "content", min: 20 })
    );
}

#[test]
fn article_update_only_touches_supplied_fields() {
    let update = prepare_article_update(Some("Replacement title"), None, &limits())
        .expect("title-only update");
    assert_eq!(update.title.as_deref(), Some("Replacement title"));
    assert_eq!(update.content, None);

    let update = prepare_article_update(None, None, &limits()).expect("no-op update");
    assert_eq!(update.title, None);
    assert_eq!(update.content, None);
}

#[test]
fn comment_write_path_enforces_visible_length() {
    // The six-character minimum counts what a reader sees, not markup.
    assert_eq!(
        prepare_comment(Some("<b>hey</b>"), &limits()),
        Err(ContentError::TooShort { field: "comment", min: 6 })
    );

    let accepted = prepare_comment(Some("<b>hey there</b> friend"), &limits())
        .expect("valid comment");
    assert!(visible_char_count(&accepted) >= 6);
    assert!(accepted.contains("<b>hey there</b>"));
}

#[test]
fn comment_rejected_when_sanitization_leaves_nothing() {
    let result = prepare_comment(
        Some(r#"<a href="javascript:alert(1)">a perfectly long looking comment</a>"#),
        &limits(),
    );
    assert_eq!(result, Err(ContentError::EmptyAfterFiltering("comment")));
}

#[test]
fn rejection_messages_are_user_facing() {
    let error = prepare_comment(Some("hi"), &limits()).expect_err("too short");
    assert_eq!(error.to_string(), "The comment must be at least 6 characters");

    let error = prepare_article(None, Some("Long enough article content."), &limits())
        .expect_err("missing title");
    assert_eq!(error.to_string(), "The title is required");
}
