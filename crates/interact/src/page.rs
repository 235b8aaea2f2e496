//! Page - a document plus the listeners wired onto it
//!
//! The host tree is an explicit value: helpers take `&mut Page`, so several
//! independent pages can live side by side.

use dom::{tags, Document, DomSerializer, NodeId, Result};

use crate::config::InteractConfig;
use crate::event::{Event, EventKind};
use crate::handlers::Handler;
use crate::listeners::ListenerRegistry;

#[derive(Debug)]
pub struct Page {
    config: InteractConfig,
    document: Document,
    listeners: ListenerRegistry,
}

impl Page {
    /// Create a page with an empty document and default config
    pub fn new() -> Self {
        Self::with_config(InteractConfig::default())
    }

    pub fn with_config(config: InteractConfig) -> Self {
        Self::from_document(Document::new(), config)
    }

    /// Wrap an existing (e.g. loaded) document
    pub fn from_document(document: Document, config: InteractConfig) -> Self {
        Self {
            config,
            document,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn config(&self) -> &InteractConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    /// `addEventListener`; an equal handler already on the node is not added twice
    pub fn add_event_listener(&mut self, node: NodeId, kind: EventKind, handler: Handler) -> bool {
        let added = self.listeners.register(node, kind, handler);
        tracing::debug!(node, ?kind, added, "registered listener");
        added
    }

    /// Drop listeners registered on `nodes`
    pub fn forget_listeners(&mut self, nodes: &[NodeId]) -> usize {
        let dropped = self.listeners.forget(nodes);
        tracing::debug!(dropped, "forgot listeners");
        dropped
    }

    /// Fire `event` at its target, bubbling to the root, then run the default action
    pub fn dispatch(&mut self, mut event: Event) -> Result<Event> {
        // Path is fixed before any listener runs
        let path = self.document.arena().ancestors_inclusive(event.target)?;
        let xpath = DomSerializer::new().generate_xpath(self.document.arena(), event.target)?;
        tracing::debug!(kind = ?event.kind, target = %xpath, "dispatching event");

        for node in path {
            for handler in self.listeners.handlers(node, event.kind) {
                tracing::trace!(node, ?handler, "invoking listener");
                handler.handle(&mut self.document, &mut event, &self.config)?;
            }
        }

        self.run_default_action(&event)?;
        Ok(event)
    }

    /// `HTMLElement.click()`
    pub fn click(&mut self, node: NodeId) -> Result<Event> {
        self.dispatch(Event::click(node))
    }

    /// `form.dispatchEvent(new Event('submit', { cancelable: true }))`
    pub fn submit(&mut self, form: NodeId) -> Result<Event> {
        self.dispatch(Event::submit(form))
    }

    /// Nearest `<form>` ancestor of `node`
    pub fn owning_form(&self, node: NodeId) -> Result<Option<NodeId>> {
        let arena = self.document.arena();
        for ancestor in arena.ancestors_inclusive(node)?.into_iter().skip(1) {
            if arena.get(ancestor)?.is_tag(tags::FORM) {
                return Ok(Some(ancestor));
            }
        }
        Ok(None)
    }

    fn run_default_action(&mut self, event: &Event) -> Result<()> {
        if event.default_prevented() {
            return Ok(());
        }

        match event.kind {
            EventKind::Click => {
                if self.document.node(event.target)?.is_submit_control() {
                    if let Some(form) = self.owning_form(event.target)? {
                        self.submit(form)?;
                    }
                }
            }
            EventKind::Submit => {
                // No navigation in this host
                tracing::debug!(form = event.target, "submit was not prevented");
            }
        }
        Ok(())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
