//! Utility functions for DOM processing

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::{NodeId, NodeType};

/// Cap text length to keep outlines readable
pub fn cap_text_length(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
    }
}

/// Split a `class` attribute into its tokens
pub fn class_tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split_ascii_whitespace()
}

/// Add `class` to a class list, keeping existing order. Returns `None` if already present.
pub fn add_class_token(list: &str, class: &str) -> Option<String> {
    if class_tokens(list).any(|token| token == class) {
        return None;
    }
    let mut tokens: Vec<&str> = class_tokens(list).collect();
    tokens.push(class);
    Some(tokens.join(" "))
}

/// Remove `class` from a class list. Returns `None` if it was not present.
pub fn remove_class_token(list: &str, class: &str) -> Option<String> {
    if !class_tokens(list).any(|token| token == class) {
        return None;
    }
    Some(
        class_tokens(list)
            .filter(|token| *token != class)
            .collect::<Vec<_>>()
            .join(" "),
    )
}

/// True when the value is empty after a JS-style `trim()`
///
/// JS trims White_Space and U+FEFF but not U+0085 (NEL).
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
        .is_empty()
}

/// Get all text content from node and its descendants, in document order
pub fn get_text_content(arena: &DomArena, node_id: NodeId) -> Result<String> {
    let mut text = String::new();

    arena.traverse_df(node_id, |node| {
        if node.node_type == NodeType::Text {
            text.push_str(&node.node_value);
        }
        Ok(())
    })?;

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_text_length() {
        assert_eq!(cap_text_length("hello", 10), "hello");
        assert_eq!(cap_text_length("hello world", 5), "hello...");
        assert_eq!(cap_text_length("héllo wörld", 4), "héll...");
    }

    #[test]
    fn test_class_token_edits() {
        assert_eq!(add_class_token("", "hidden").as_deref(), Some("hidden"));
        assert_eq!(
            add_class_token("content", "hidden").as_deref(),
            Some("content hidden")
        );
        assert_eq!(add_class_token("hidden", "hidden"), None);

        assert_eq!(
            remove_class_token("a hidden b", "hidden").as_deref(),
            Some("a b")
        );
        assert_eq!(remove_class_token("a b", "hidden"), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \t\n"));
        assert!(is_blank("\u{feff} "));
        assert!(!is_blank(" hello "));
        assert!(!is_blank("\u{85}"));
        assert!(is_blank("\u{a0}\u{2028}"));
    }
}
