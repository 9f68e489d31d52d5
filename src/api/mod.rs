//! Purpose: Define the stable public Rust API boundary for domkit.
//! Exports: Capability traits, guard helpers, JSON normalization and host adapters.
//! Role: Public, additive-only surface; callers should import from here.
//! Invariants: Every helper is generic over `ElementHandle`/`EventHandle`; no host is privileged.

pub use crate::core::class::{add_class, has_class, remove_class};
pub use crate::core::element::ElementHandle;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::event::{EventHandle, stop_propagation};
pub use crate::core::visibility::{
    ARIA_HIDDEN, HIDDEN_CLASS, VisibilityOptions, hide_element, hide_element_with, is_hidden,
    show_element, show_element_with,
};
pub use crate::host::memory::{MemoryElement, MemoryEvent, Mutation};
pub use crate::host::selection::Selection;
pub use crate::json::{JsonData, ParseFailureCategory, empty_object, from_json, from_json_as};
