// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::debug;

use super::dom::{Element, Node};
use super::policy::{DISCARD_CONTENT_TAGS, TierPolicy};

/// Depth-first policy application over a parsed fragment. Text nodes pass
/// through untouched; escaping for a rendering context is the caller's
/// concern when re-embedding the output.
pub(crate) fn apply_policy(nodes: Vec<Node>, policy: &TierPolicy) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Text(text) => out.push(Node::Text(text)),
            Node::Element(element) => filter_element(element, policy, &mut out),
        }
    }
    out
}

fn filter_element(mut element: Element, policy: &TierPolicy, out: &mut Vec<Node>) {
    if !policy.is_tag_allowed(&element.name) {
        if DISCARD_CONTENT_TAGS.contains(element.name.as_str()) {
            remove_subtree(element, "non-visible content tag");
        } else {
            unwrap_element(element, policy, out);
        }
        return;
    }

    retain_allowed_attributes(&mut element, policy);
    strip_event_handler_attributes(&mut element);

    if has_disallowed_url_scheme(&element, policy) {
        // Unwrapping here would leave attacker-controlled link text that
        // reads as a legitimate link, so the whole element goes.
        remove_subtree(element, "disallowed URL scheme");
        return;
    }

    if policy.rewrite_links && element.name == "a" {
        apply_link_attributes(&mut element);
    }

    let children = std::mem::take(&mut element.children);
    element.children = apply_policy(children, policy);
    out.push(Node::Element(element));
}

/// A tag outside the allow-list degrades to plain content: the element node
/// disappears and its filtered children splice into the parent at the same
/// position.
fn unwrap_element(element: Element, policy: &TierPolicy, out: &mut Vec<Node>) {
    out.extend(apply_policy(element.children, policy));
}

/// Full removal of the element and everything under it, text included.
fn remove_subtree(element: Element, reason: &str) {
    debug!("removed <{}> subtree: {}", element.name, reason);
    drop(element);
}

fn retain_allowed_attributes(element: &mut Element, policy: &TierPolicy) {
    let allowed = policy.allowed_attributes_for(&element.name);
    element.attributes.retain(|(name, _)| match allowed {
        Some(names) => names.contains(name.as_str()),
        None => false,
    });
}

/// Blanket pass, independent of the per-tag allow-list, so a future
/// allow-list edit cannot reopen an event-handler hole.
fn strip_event_handler_attributes(element: &mut Element) {
    element
        .attributes
        .retain(|(name, _)| !is_event_handler_name(name));
}

fn is_event_handler_name(name: &str) -> bool {
    name.len() > 2 && name.starts_with("on")
}

fn has_disallowed_url_scheme(element: &Element, policy: &TierPolicy) -> bool {
    element.attributes.iter().any(|(name, value)| {
        policy.is_url_attribute(name)
            && match url_scheme(value) {
                UrlScheme::Relative => false,
                UrlScheme::Named(scheme) => !policy.is_scheme_allowed(&scheme),
                UrlScheme::Malformed => true,
            }
    })
}

enum UrlScheme {
    Relative,
    Named(String),
    Malformed,
}

/// Scheme of a URL-bearing attribute value: the characters before the first
/// `:`, unless a `/`, `?` or `#` comes first. ASCII whitespace and control
/// characters are skipped the way browsers skip them. A colon behind a
/// prefix that is not a well-formed scheme token fails closed as malformed
/// rather than passing as relative.
fn url_scheme(value: &str) -> UrlScheme {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect();
    for (index, ch) in compact.char_indices() {
        match ch {
            ':' => {
                let prefix = &compact[..index];
                let mut chars = prefix.chars();
                let well_formed = match chars.next() {
                    Some(first) if first.is_ascii_alphabetic() => {
                        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
                    }
                    _ => false,
                };
                if well_formed {
                    return UrlScheme::Named(prefix.to_ascii_lowercase());
                }
                return UrlScheme::Malformed;
            }
            '/' | '?' | '#' => return UrlScheme::Relative,
            _ => {}
        }
    }
    UrlScheme::Relative
}

/// Every surviving anchor opens in a new tab with a hardened rel, whatever
/// the author supplied.
fn apply_link_attributes(element: &mut Element) {
    element.set_attribute("target", "_blank");
    element.set_attribute("rel", "noopener noreferrer nofollow ugc");
}
