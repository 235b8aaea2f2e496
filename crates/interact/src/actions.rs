//! Interaction helpers
//!
//! Every helper resolves what it needs by id and creates whatever is missing,
//! so calling one again rebuilds structure instead of failing. The `wire_*`
//! functions only register handlers; the `simulate_*` functions also fire one
//! activation right away.

use dom::{tags, Document, DomNode, NodeId, Result};

use crate::config::InteractConfig;
use crate::event::EventKind;
use crate::handlers::Handler;
use crate::page::Page;

/// Nodes making up a wired form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormParts {
    pub form: NodeId,
    pub input: NodeId,
    /// `None` when a pre-existing form has no submit control
    pub submit: Option<NodeId>,
    pub error: NodeId,
    pub target: NodeId,
}

/// Set the text of the element with `id`, creating a `<div>` under body if absent
pub fn upsert_element(page: &mut Page, id: &str, text: &str) -> Result<NodeId> {
    let element = resolve_or_create(page.document_mut(), id, tags::DIV)?;
    page.document_mut().set_text_content(element, text)?;
    Ok(element)
}

/// Detach the element with `id` and drop listeners wired inside it.
/// Returns false when there was nothing to remove.
pub fn remove_element(page: &mut Page, id: &str) -> Result<bool> {
    let doc = page.document_mut();
    let Some(element) = doc.get_element_by_id(id)? else {
        return Ok(false);
    };

    let mut subtree = doc.arena().descendants(element)?;
    subtree.push(element);
    doc.remove(element)?;
    page.forget_listeners(&subtree);
    tracing::debug!(id, node = element, "removed element");
    Ok(true)
}

/// Ensure container `id` holds a button whose click shows `content`. Returns the button.
pub fn wire_click(page: &mut Page, id: &str, content: &str) -> Result<NodeId> {
    let label = page.config().button_label.clone();
    let doc = page.document_mut();
    let container = resolve_or_create(doc, id, tags::DIV)?;

    let button = match doc.query_descendant(container, |node| node.is_tag(tags::BUTTON))? {
        Some(button) => button,
        None => {
            let button = doc.create_element(tags::BUTTON);
            doc.set_text_content(button, &label)?;
            doc.append_child(container, button)?;
            button
        }
    };

    page.add_event_listener(
        button,
        EventKind::Click,
        Handler::ShowContent {
            container,
            content: content.to_string(),
        },
    );
    Ok(button)
}

/// [`wire_click`] followed by one click
pub fn simulate_click(page: &mut Page, id: &str, content: &str) -> Result<NodeId> {
    let button = wire_click(page, id, content)?;
    page.click(button)?;
    Ok(button)
}

/// Ensure form `form_id` exists and validates its input into `target_id` on submit
pub fn wire_form_submit(page: &mut Page, form_id: &str, target_id: &str) -> Result<FormParts> {
    let config = page.config().clone();
    let input_id = config.input_id_for(form_id);
    let error_id = config.error_id_for(form_id);
    let doc = page.document_mut();

    let form = match doc.get_element_by_id(form_id)? {
        Some(form) => form,
        None => build_form(doc, form_id, &input_id, &error_id, &config)?,
    };

    // Tagged input first (scoped id, then the plain one), then any input
    let tagged = |node: &DomNode| {
        node.is_tag(tags::INPUT)
            && (node.id() == Some(input_id.as_str())
                || node.id() == Some(config.input_id.as_str()))
    };
    let input = match doc.query_descendant(form, tagged)? {
        Some(input) => input,
        None => match doc.query_descendant(form, |node| node.is_tag(tags::INPUT))? {
            Some(input) => input,
            None => {
                let input = text_input(doc, &input_id)?;
                doc.append_child(form, input)?;
                input
            }
        },
    };
    let submit = doc.query_descendant(form, |node| node.is_submit_control())?;

    let error = match doc.get_element_by_id(&error_id)? {
        Some(error) => error,
        None => {
            let error = error_slot(doc, &error_id, &config)?;
            doc.append_child(form, error)?;
            error
        }
    };

    let target = resolve_or_create(doc, target_id, tags::DIV)?;

    page.add_event_listener(
        form,
        EventKind::Submit,
        Handler::ValidateInput {
            input,
            error,
            target,
        },
    );

    Ok(FormParts {
        form,
        input,
        submit,
        error,
        target,
    })
}

/// [`wire_form_submit`] followed by one submit
pub fn simulate_form_submit(page: &mut Page, form_id: &str, target_id: &str) -> Result<FormParts> {
    let parts = wire_form_submit(page, form_id, target_id)?;
    page.submit(parts.form)?;
    Ok(parts)
}

/// True when the error slot is not carrying the hidden class
pub fn is_error_shown(page: &Page, parts: &FormParts) -> Result<bool> {
    Ok(!page
        .document()
        .has_class(parts.error, &page.config().hidden_class)?)
}

fn resolve_or_create(doc: &mut Document, id: &str, tag: &str) -> Result<NodeId> {
    if let Some(existing) = doc.get_element_by_id(id)? {
        return Ok(existing);
    }

    let element = doc.create_element(tag);
    doc.set_attribute(element, "id", id)?;
    let body = doc.body();
    doc.append_child(body, element)?;
    tracing::debug!(id, tag, node = element, "created element");
    Ok(element)
}

fn build_form(
    doc: &mut Document,
    form_id: &str,
    input_id: &str,
    error_id: &str,
    config: &InteractConfig,
) -> Result<NodeId> {
    let form = doc.create_element(tags::FORM);
    doc.set_attribute(form, "id", form_id)?;

    let input = text_input(doc, input_id)?;
    doc.append_child(form, input)?;

    let submit = doc.create_element(tags::BUTTON);
    doc.set_attribute(submit, "type", "submit")?;
    doc.set_text_content(submit, &config.submit_label)?;
    doc.append_child(form, submit)?;

    let error = error_slot(doc, error_id, config)?;
    doc.append_child(form, error)?;

    let body = doc.body();
    doc.append_child(body, form)?;
    tracing::debug!(id = form_id, node = form, "created form");
    Ok(form)
}

fn text_input(doc: &mut Document, input_id: &str) -> Result<NodeId> {
    let input = doc.create_element(tags::INPUT);
    doc.set_attribute(input, "type", "text")?;
    doc.set_attribute(input, "id", input_id)?;
    Ok(input)
}

fn error_slot(doc: &mut Document, error_id: &str, config: &InteractConfig) -> Result<NodeId> {
    let error = doc.create_element(tags::DIV);
    doc.set_attribute(error, "id", error_id)?;
    doc.set_attribute(error, "class", &config.hidden_class)?;
    Ok(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorScope;
    use dom::{load_document, DomSerializer};

    fn count(page: &Page, id: &str) -> usize {
        page.document().elements_by_id(id).unwrap().len()
    }

    fn text_of(page: &Page, id: &str) -> String {
        let node = page.document().get_element_by_id(id).unwrap().unwrap();
        page.document().text_content(node).unwrap()
    }

    #[test]
    fn test_upsert_creates_then_updates() {
        let mut page = Page::new();

        let first = upsert_element(&mut page, "greeting", "hello").unwrap();
        assert_eq!(text_of(&page, "greeting"), "hello");

        let second = upsert_element(&mut page, "greeting", "bye").unwrap();
        assert_eq!(first, second);
        assert_eq!(text_of(&page, "greeting"), "bye");
        assert_eq!(count(&page, "greeting"), 1);

        let parent = page.document().node(first).unwrap().parent_id;
        assert_eq!(parent, Some(page.document().body()));
    }

    #[test]
    fn test_upsert_reuses_existing_element_of_any_tag() {
        let mut page = Page::new();
        let doc = page.document_mut();
        let span = doc.create_element("span");
        doc.set_attribute(span, "id", "label").unwrap();
        let body = doc.body();
        doc.append_child(body, span).unwrap();

        assert_eq!(upsert_element(&mut page, "label", "x").unwrap(), span);
        assert_eq!(text_of(&page, "label"), "x");
    }

    #[test]
    fn test_remove_element() {
        let mut page = Page::new();
        let before = DomSerializer::new()
            .serialize(page.document().arena())
            .unwrap();

        assert!(!remove_element(&mut page, "missing").unwrap());
        let after = DomSerializer::new()
            .serialize(page.document().arena())
            .unwrap();
        assert_eq!(before, after);

        upsert_element(&mut page, "doomed", "bye").unwrap();
        assert!(remove_element(&mut page, "doomed").unwrap());
        assert_eq!(page.document().get_element_by_id("doomed").unwrap(), None);
        assert!(!remove_element(&mut page, "doomed").unwrap());
    }

    #[test]
    fn test_simulate_click_shows_content() {
        let mut page = Page::new();

        let button = simulate_click(&mut page, "panel", "revealed").unwrap();
        let panel = page.document().get_element_by_id("panel").unwrap().unwrap();

        let children = page.document().arena().children(panel).unwrap();
        let slots: Vec<_> = children.iter().filter(|n| n.has_class("content")).collect();
        assert_eq!(slots.len(), 1);
        assert_eq!(
            page.document().text_content(slots[0].node_id).unwrap(),
            "revealed"
        );
        assert_eq!(page.document().text_content(button).unwrap(), "Click me");
    }

    #[test]
    fn test_simulate_click_again_overwrites() {
        let mut page = Page::new();
        let first = simulate_click(&mut page, "panel", "one").unwrap();
        let second = simulate_click(&mut page, "panel", "two").unwrap();
        assert_eq!(first, second);

        // same content twice registers no extra handler
        simulate_click(&mut page, "panel", "two").unwrap();
        assert_eq!(page.listeners().count(first, EventKind::Click), 2);

        let panel = page.document().get_element_by_id("panel").unwrap().unwrap();
        let slots = page
            .document()
            .arena()
            .descendants(panel)
            .unwrap()
            .into_iter()
            .filter(|&id| page.document().has_class(id, "content").unwrap())
            .count();
        assert_eq!(slots, 1);
        assert_eq!(text_of(&page, "panel"), "Click metwo");

        page.click(first).unwrap();
        assert_eq!(text_of(&page, "panel"), "Click metwo");
    }

    #[test]
    fn test_wire_click_does_not_fire() {
        let mut page = Page::new();
        let button = wire_click(&mut page, "panel", "later").unwrap();
        assert_eq!(text_of(&page, "panel"), "Click me");

        page.click(button).unwrap();
        assert_eq!(text_of(&page, "panel"), "Click melater");
    }

    #[test]
    fn test_click_uses_configured_label() {
        let config = InteractConfig::from_json(r#"{"button_label": "Reveal"}"#).unwrap();
        let mut page = Page::with_config(config);
        let button = simulate_click(&mut page, "panel", "x").unwrap();
        assert_eq!(page.document().text_content(button).unwrap(), "Reveal");
    }

    #[test]
    fn test_simulate_form_submit_with_empty_input() {
        let mut page = Page::new();
        upsert_element(&mut page, "out", "untouched").unwrap();

        let parts = simulate_form_submit(&mut page, "signup", "out").unwrap();

        assert!(is_error_shown(&page, &parts).unwrap());
        assert_eq!(
            page.document().text_content(parts.error).unwrap(),
            "Input cannot be empty"
        );
        assert_eq!(text_of(&page, "out"), "untouched");
        assert!(parts.submit.is_some());
        assert_eq!(
            page.document().get_attribute(parts.input, "id").unwrap(),
            Some("signup-user-input")
        );
    }

    #[test]
    fn test_form_submit_with_value_writes_target() {
        let mut page = Page::new();
        let parts = wire_form_submit(&mut page, "signup", "out").unwrap();
        assert!(!is_error_shown(&page, &parts).unwrap());

        page.submit(parts.form).unwrap();
        assert!(is_error_shown(&page, &parts).unwrap());

        page.document_mut().set_value(parts.input, "hello").unwrap();
        page.submit(parts.form).unwrap();
        assert!(!is_error_shown(&page, &parts).unwrap());
        assert_eq!(text_of(&page, "out"), "hello");

        // clicking the submit button goes through the same handler
        page.document_mut().set_value(parts.input, "again").unwrap();
        page.click(parts.submit.unwrap()).unwrap();
        assert_eq!(text_of(&page, "out"), "again");
    }

    #[test]
    fn test_simulate_form_submit_on_loaded_form() {
        let doc = load_document(&serde_json::json!({
            "root": {
                "nodeType": 9,
                "nodeName": "#document",
                "children": [{
                    "nodeType": 1,
                    "nodeName": "HTML",
                    "children": [{
                        "nodeType": 1,
                        "nodeName": "BODY",
                        "children": [{
                            "nodeType": 1,
                            "nodeName": "FORM",
                            "attributes": ["id", "search"],
                            "children": [{
                                "nodeType": 1,
                                "nodeName": "INPUT",
                                "attributes": ["name", "q"],
                                "value": "hello"
                            }]
                        }]
                    }]
                }]
            }
        }))
        .unwrap();
        let mut page = Page::from_document(doc, InteractConfig::default());

        let parts = simulate_form_submit(&mut page, "search", "out").unwrap();

        // untagged input is the fallback, error slot is created inside the form
        assert_eq!(page.document().get_attribute(parts.input, "name").unwrap(), Some("q"));
        assert_eq!(parts.submit, None);
        assert_eq!(
            page.document().node(parts.error).unwrap().parent_id,
            Some(parts.form)
        );
        assert!(!is_error_shown(&page, &parts).unwrap());
        assert_eq!(text_of(&page, "out"), "hello");
    }

    #[test]
    fn test_forms_get_independent_error_slots() {
        let mut page = Page::new();
        let a = simulate_form_submit(&mut page, "a", "out-a").unwrap();
        page.document_mut().set_value(a.input, "ok").unwrap();
        page.submit(a.form).unwrap();

        let b = simulate_form_submit(&mut page, "b", "out-b").unwrap();

        assert_ne!(a.error, b.error);
        assert!(!is_error_shown(&page, &a).unwrap());
        assert!(is_error_shown(&page, &b).unwrap());
    }

    #[test]
    fn test_shared_scope_reuses_first_error_slot() {
        let config = InteractConfig {
            error_scope: ErrorScope::Shared,
            ..InteractConfig::default()
        };
        let mut page = Page::with_config(config);

        let a = simulate_form_submit(&mut page, "a", "out-a").unwrap();
        let b = simulate_form_submit(&mut page, "b", "out-b").unwrap();

        assert_eq!(a.error, b.error);
        assert_eq!(count(&page, "error-message"), 2);
    }

    #[test]
    fn test_wire_form_twice_keeps_one_form() {
        let mut page = Page::new();
        let first = wire_form_submit(&mut page, "signup", "out").unwrap();
        let second = wire_form_submit(&mut page, "signup", "out").unwrap();

        assert_eq!(first, second);
        assert_eq!(count(&page, "signup"), 1);
        assert_eq!(page.listeners().count(first.form, EventKind::Submit), 1);
    }

    fn content_of(page: &Page, id: &str) -> String {
        let container = page.document().get_element_by_id(id).unwrap().unwrap();
        let slot = page
            .document()
            .query_descendant(container, |node| node.has_class("content"))
            .unwrap()
            .unwrap();
        page.document().text_content(slot).unwrap()
    }

    #[test]
    fn test_click_content_follows_latest_call() {
        let mut page = Page::new();

        for content in ["one", "two", "one", "three", "two"] {
            simulate_click(&mut page, "p", content).unwrap();
            assert_eq!(content_of(&page, "p"), content);
        }

        let button = simulate_click(&mut page, "p", "one").unwrap();
        assert_eq!(page.listeners().count(button, EventKind::Click), 3);
        page.click(button).unwrap();
        assert_eq!(content_of(&page, "p"), "one");
    }

    #[test]
    fn test_loaded_form_prefers_plain_tagged_input() {
        let doc = load_document(&serde_json::json!({
            "root": {
                "nodeType": 9,
                "nodeName": "#document",
                "children": [{
                    "nodeType": 1,
                    "nodeName": "HTML",
                    "children": [{
                        "nodeType": 1,
                        "nodeName": "BODY",
                        "children": [{
                            "nodeType": 1,
                            "nodeName": "FORM",
                            "attributes": ["id", "f"],
                            "children": [
                                {
                                    "nodeType": 1,
                                    "nodeName": "INPUT",
                                    "attributes": ["name", "other"]
                                },
                                {
                                    "nodeType": 1,
                                    "nodeName": "INPUT",
                                    "attributes": ["id", "user-input"],
                                    "value": "hello"
                                }
                            ]
                        }]
                    }]
                }]
            }
        }))
        .unwrap();
        let mut page = Page::from_document(doc, InteractConfig::default());

        let parts = simulate_form_submit(&mut page, "f", "out").unwrap();

        assert_eq!(
            page.document().get_attribute(parts.input, "id").unwrap(),
            Some("user-input")
        );
        assert!(!is_error_shown(&page, &parts).unwrap());
        assert_eq!(text_of(&page, "out"), "hello");
    }

    #[test]
    fn test_remove_element_forgets_listeners() {
        let mut page = Page::new();
        let button = simulate_click(&mut page, "panel", "a").unwrap();
        simulate_click(&mut page, "panel", "b").unwrap();
        let parts = wire_form_submit(&mut page, "signup", "out").unwrap();

        assert!(remove_element(&mut page, "panel").unwrap());
        assert_eq!(page.listeners().count(button, EventKind::Click), 0);
        assert_eq!(page.listeners().count(parts.form, EventKind::Submit), 1);

        // a fresh container gets a fresh button and a single handler
        let rebuilt = simulate_click(&mut page, "panel", "c").unwrap();
        assert_ne!(rebuilt, button);
        assert_eq!(page.listeners().len(), 2);
        assert_eq!(content_of(&page, "panel"), "c");
    }
}
