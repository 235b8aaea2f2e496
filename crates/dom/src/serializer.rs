//! DOM Serializer - render the connected tree as an indented HTML outline
//!
//! Used for logging and test assertions. Not a conforming HTML serializer:
//! attributes are filtered and long text is capped.

use crate::arena::DomArena;
use crate::error::Result;
use crate::types::*;
use crate::utils;

/// Elements that never get a closing tag
const VOID_ELEMENTS: &[&str] = &["INPUT", "BR", "HR", "IMG", "META", "LINK"];

/// Serializer configuration
#[derive(Debug, Clone)]
pub struct SerializerConfig {
    pub include_attributes: Vec<String>,
    pub max_text_length: usize,
}

impl Default for SerializerConfig {
    fn default() -> Self {
        Self {
            include_attributes: DEFAULT_INCLUDE_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_text_length: 200,
        }
    }
}

/// DOM Tree Serializer
pub struct DomSerializer {
    config: SerializerConfig,
}

impl DomSerializer {
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    pub fn with_config(config: SerializerConfig) -> Self {
        Self { config }
    }

    /// Serialize the whole tree starting at the root
    pub fn serialize(&self, arena: &DomArena) -> Result<String> {
        let mut output = String::with_capacity(1024);

        if let Some(root_id) = arena.root_id() {
            self.serialize_node(arena, root_id, 0, &mut output)?;
        }

        Ok(output)
    }

    /// Serialize a subtree
    pub fn serialize_subtree(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut output = String::new();
        self.serialize_node(arena, node_id, 0, &mut output)?;
        Ok(output)
    }

    fn serialize_node(
        &self,
        arena: &DomArena,
        node_id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> Result<()> {
        let node = arena.get(node_id)?;
        let indent = "  ".repeat(depth);

        match node.node_type {
            NodeType::Element => {
                let tag = node.node_name.to_ascii_lowercase();
                output.push_str(&indent);
                output.push('<');
                output.push_str(&tag);

                for attr_name in &self.config.include_attributes {
                    if let Some(attr_value) = node.attr(attr_name) {
                        output.push_str(&format!(" {}=\"{}\"", attr_name, attr_value));
                    }
                }
                output.push_str(">\n");

                if VOID_ELEMENTS.contains(&node.node_name.as_str()) {
                    return Ok(());
                }

                for &child_id in &node.children_ids {
                    self.serialize_node(arena, child_id, depth + 1, output)?;
                }

                output.push_str(&indent);
                output.push_str("</");
                output.push_str(&tag);
                output.push_str(">\n");
            }
            NodeType::Text => {
                let text = node.node_value.trim();
                if !text.is_empty() {
                    output.push_str(&indent);
                    output.push_str(&utils::cap_text_length(text, self.config.max_text_length));
                    output.push('\n');
                }
            }
            NodeType::Document | NodeType::DocumentFragment => {
                for &child_id in &node.children_ids {
                    self.serialize_node(arena, child_id, depth, output)?;
                }
            }
            NodeType::Comment => {}
        }

        Ok(())
    }

    /// Generate XPath for a node
    pub fn generate_xpath(&self, arena: &DomArena, node_id: NodeId) -> Result<String> {
        let mut path_parts = Vec::new();
        let mut current_id = Some(node_id);

        while let Some(id) = current_id {
            let node = arena.get(id)?;

            if node.node_type == NodeType::Element {
                // Position among siblings with same tag name
                let position = match node.parent_id {
                    Some(parent_id) => arena
                        .children(parent_id)?
                        .into_iter()
                        .filter(|child| {
                            child.node_type == NodeType::Element
                                && child.node_name == node.node_name
                        })
                        .position(|child| child.node_id == node.node_id)
                        .map(|p| p + 1) // XPath is 1-indexed
                        .unwrap_or(1),
                    None => 1,
                };

                path_parts.push(format!("{}[{}]", node.node_name.to_lowercase(), position));
            }

            current_id = node.parent_id;
        }

        path_parts.reverse();
        Ok(format!("/{}", path_parts.join("/")))
    }
}

impl Default for DomSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn sample() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let form = doc.create_element("form");
        doc.set_attribute(form, "id", "signup").unwrap();
        let input = doc.create_element("input");
        doc.set_attribute(input, "type", "text").unwrap();
        let error = doc.create_element("div");
        doc.set_attribute(error, "class", "hidden").unwrap();
        doc.set_text_content(error, "Input cannot be empty").unwrap();

        doc.append_child(form, input).unwrap();
        doc.append_child(form, error).unwrap();
        doc.append_child(doc.body(), form).unwrap();
        (doc, form, error)
    }

    #[test]
    fn test_serialize_outline() {
        let (doc, _, _) = sample();
        let output = DomSerializer::new().serialize(doc.arena()).unwrap();

        let expected = "\
<html>
  <body>
    <form id=\"signup\">
      <input type=\"text\">
      <div class=\"hidden\">
        Input cannot be empty
      </div>
    </form>
  </body>
</html>
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_text_is_capped() {
        let (doc, _, error) = sample();
        let serializer = DomSerializer::with_config(SerializerConfig {
            include_attributes: Vec::new(),
            max_text_length: 5,
        });

        let output = serializer.serialize_subtree(doc.arena(), error).unwrap();
        assert_eq!(output, "<div>\n  Input...\n</div>\n");
    }

    #[test]
    fn test_generate_xpath() {
        let (mut doc, form, error) = sample();
        let second = doc.create_element("div");
        doc.append_child(form, second).unwrap();

        let serializer = DomSerializer::new();
        assert_eq!(
            serializer.generate_xpath(doc.arena(), error).unwrap(),
            "/html[1]/body[1]/form[1]/div[1]"
        );
        assert_eq!(
            serializer.generate_xpath(doc.arena(), second).unwrap(),
            "/html[1]/body[1]/form[1]/div[2]"
        );
    }
}
