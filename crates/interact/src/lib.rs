//! DOM Interaction Helpers
//!
//! Upsert and remove elements by id, and simulate a click or a validated form
//! submission against an explicit [`Page`] instead of a global document.
//!
//! # Architecture
//!
//! 1. **Tree is injected**: every helper takes `&mut Page`
//! 2. **Handlers are data**: listeners are [`Handler`] values, dispatched with
//!    the document passed in, so registering the same thing twice is a no-op
//! 3. **Wire and fire are separate**: `wire_*` registers, `Page::click` /
//!    `Page::submit` activate, `simulate_*` do both
//!
//! ```ignore
//! let mut page = Page::new();
//! upsert_element(&mut page, "status", "ready")?;
//! simulate_click(&mut page, "panel", "revealed")?;
//! let form = simulate_form_submit(&mut page, "signup", "out")?;
//! assert!(is_error_shown(&page, &form)?);
//! ```

pub mod actions;
pub mod config;
pub mod event;
pub mod handlers;
pub mod listeners;
pub mod page;

pub use actions::{
    is_error_shown, remove_element, simulate_click, simulate_form_submit, upsert_element,
    wire_click, wire_form_submit, FormParts,
};
pub use config::{ErrorScope, InteractConfig};
pub use dom::{DomError, Result};
pub use event::{Event, EventKind};
pub use handlers::Handler;
pub use listeners::ListenerRegistry;
pub use page::Page;
