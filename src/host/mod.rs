// Host adapters implementing the element and event capabilities.
pub mod memory;
pub mod selection;
#[cfg(target_arch = "wasm32")]
pub mod web;
