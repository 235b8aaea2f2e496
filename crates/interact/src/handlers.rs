//! Event handlers
//!
//! Handlers are plain data, not closures: they name the nodes they touch and
//! get the document handed in at dispatch time. That keeps the listener table
//! inside the page without fighting the borrow checker, and lets equal
//! registrations be detected and skipped.

use dom::{tags, Document, NodeId, Result};

use crate::config::InteractConfig;
use crate::event::Event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handler {
    /// Write `content` into the content slot of `container`, creating the slot if needed
    ShowContent { container: NodeId, content: String },

    /// Reject an empty `input`, otherwise copy its value into `target`
    ValidateInput {
        input: NodeId,
        error: NodeId,
        target: NodeId,
    },
}

impl Handler {
    pub fn handle(
        &self,
        doc: &mut Document,
        event: &mut Event,
        config: &InteractConfig,
    ) -> Result<()> {
        match self {
            Handler::ShowContent { container, content } => {
                let slot = content_slot(doc, *container, config)?;
                doc.set_text_content(slot, content)
            }
            Handler::ValidateInput {
                input,
                error,
                target,
            } => {
                event.prevent_default();

                let value = doc.value(*input)?;
                if dom::utils::is_blank(&value) {
                    tracing::debug!(input = *input, "rejected empty input");
                    doc.set_text_content(*error, &config.empty_input_message)?;
                    doc.remove_class(*error, &config.hidden_class)
                } else {
                    doc.add_class(*error, &config.hidden_class)?;
                    doc.set_text_content(*target, &value)
                }
            }
        }
    }
}

/// Find the first descendant carrying the content class, or append one
fn content_slot(doc: &mut Document, container: NodeId, config: &InteractConfig) -> Result<NodeId> {
    let class = config.content_class.as_str();
    if let Some(slot) = doc.query_descendant(container, |node| node.has_class(class))? {
        return Ok(slot);
    }

    let slot = doc.create_element(tags::DIV);
    doc.set_attribute(slot, "class", class)?;
    doc.append_child(container, slot)?;
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_content_reuses_slot() {
        let mut doc = Document::new();
        let config = InteractConfig::default();
        let container = doc.create_element("div");
        let handler = Handler::ShowContent {
            container,
            content: "first".into(),
        };

        let mut event = Event::click(container);
        handler.handle(&mut doc, &mut event, &config).unwrap();
        handler.handle(&mut doc, &mut event, &config).unwrap();

        let children = doc.arena().children(container).unwrap();
        assert_eq!(children.len(), 1);
        assert!(children[0].has_class("content"));
        assert_eq!(doc.text_content(container).unwrap(), "first");
        assert!(!event.default_prevented());
    }

    #[test]
    fn test_validate_input_branches() {
        let mut doc = Document::new();
        let config = InteractConfig::default();
        let input = doc.create_element("input");
        let error = doc.create_element("div");
        doc.add_class(error, "hidden").unwrap();
        let target = doc.create_element("div");
        doc.set_text_content(target, "before").unwrap();

        let handler = Handler::ValidateInput {
            input,
            error,
            target,
        };

        doc.set_value(input, "   ").unwrap();
        let mut event = Event::submit(input);
        handler.handle(&mut doc, &mut event, &config).unwrap();
        assert!(event.default_prevented());
        assert!(!doc.has_class(error, "hidden").unwrap());
        assert_eq!(doc.text_content(error).unwrap(), "Input cannot be empty");
        assert_eq!(doc.text_content(target).unwrap(), "before");

        doc.set_value(input, " hello ").unwrap();
        handler
            .handle(&mut doc, &mut Event::submit(input), &config)
            .unwrap();
        assert!(doc.has_class(error, "hidden").unwrap());
        // value is copied untrimmed
        assert_eq!(doc.text_content(target).unwrap(), " hello ");
    }
}
