// This file is part of the product Vellum.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::dom::{Node, is_void_element};

/// Deterministic rendering of a filtered fragment: lowercased tag names,
/// attributes in preserved source order, `<br />`-style voids. Text renders
/// verbatim; attribute values re-encode only what the parser decoded, so a
/// second pass over the output reproduces it byte for byte.
pub(crate) fn serialize_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        serialize_node(node, &mut out);
    }
    out
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.name);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                push_escaped_attribute(value, out);
                out.push('"');
            }
            if is_void_element(&element.name) && element.children.is_empty() {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in &element.children {
                serialize_node(child, out);
            }
            out.push_str("</");
            out.push_str(&element.name);
            out.push('>');
        }
    }
}

fn push_escaped_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
}
