// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::debug;

use crate::config::ContentLimits;
use crate::content::ContentError;
use crate::security::{sanitize_body, sanitize_title};

/// Sanitized article fields ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
}

/// Sanitized article fields for a partial update. `None` means the field was
/// not supplied and stays untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Validate and sanitize a new article submission.
///
/// Length minimums apply to the raw input (what the author typed), before
/// sanitization; the emptiness check applies to the sanitized result.
pub fn prepare_article(
    title: Option<&str>,
    content: Option<&str>,
    limits: &ContentLimits,
) -> Result<ArticleDraft, ContentError> {
    let title_raw = require_field(title, "title")?;
    let content_raw = require_field(content, "content")?;
    check_min_chars(title_raw, "title", limits.min_title_chars)?;
    check_min_chars(content_raw, "content", limits.min_content_chars)?;

    let title = sanitize_title(Some(title_raw));
    if title.is_empty() {
        debug!("article rejected: title empty after filtering");
        return Err(ContentError::EmptyAfterFiltering("title"));
    }
    let content = sanitize_body(Some(content_raw));
    if content.is_empty() {
        debug!("article rejected: content empty after filtering");
        return Err(ContentError::EmptyAfterFiltering("content"));
    }

    Ok(ArticleDraft { title, content })
}

/// Validate and sanitize the supplied fields of an article update. Fields
/// that are absent or blank pass through as `None`.
pub fn prepare_article_update(
    title: Option<&str>,
    content: Option<&str>,
    limits: &ContentLimits,
) -> Result<ArticleUpdate, ContentError> {
    let mut update = ArticleUpdate::default();

    if let Some(title_raw) = supplied(title) {
        check_min_chars(title_raw, "title", limits.min_title_chars)?;
        let title = sanitize_title(Some(title_raw));
        if title.is_empty() {
            return Err(ContentError::EmptyAfterFiltering("title"));
        }
        update.title = Some(title);
    }

    if let Some(content_raw) = supplied(content) {
        check_min_chars(content_raw, "content", limits.min_content_chars)?;
        let content = sanitize_body(Some(content_raw));
        if content.is_empty() {
            return Err(ContentError::EmptyAfterFiltering("content"));
        }
        update.content = Some(content);
    }

    Ok(update)
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn require_field<'a>(
    value: Option<&'a str>,
    field: &'static str,
) -> Result<&'a str, ContentError> {
    supplied(value).ok_or(ContentError::Required(field))
}

fn check_min_chars(raw: &str, field: &'static str, min: usize) -> Result<(), ContentError> {
    if raw.chars().count() < min {
        debug!("{} rejected: {} raw chars, minimum {}", field, raw.chars().count(), min);
        return Err(ContentError::TooShort { field, min });
    }
    Ok(())
}
