//! Host Tree Library
//!
//! An owned, arena-backed DOM that interaction helpers mutate through an
//! explicit `&mut Document` instead of an ambient global.
//!
//! ## Core Design
//!
//! ```text
//! JSON description → loader → DomArena (owned) → Document API → serializer
//!                                  ↓                  ↓
//!                           NodeId (u32)       EventBus (mutations)
//! ```

pub mod arena;
pub mod document;
pub mod error;
pub mod events;
pub mod loader;
pub mod serializer;
pub mod types;
pub mod utils;

pub use arena::DomArena;
pub use document::Document;
pub use error::{DomError, Result};
pub use events::{EventBus, MutationEvent};
pub use loader::{load_document, load_document_str};
pub use serializer::DomSerializer;
pub use types::*;
