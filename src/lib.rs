//! Purpose: Guarded DOM helpers shared by native and wrapper-style element hosts.
//! Exports: `api` (stable surface), `core` (traits, guards, errors), `host` (adapters), `json`.
//! Role: Host-neutral library; the browser adapter is compiled only for `wasm32`.
//! Invariants: Helpers never create or retain element/event handles; callers own them.
//! Invariants: Only `stop_propagation` and `from_json` swallow failures; everything else propagates.
pub mod api;
pub mod core;
pub mod host;
pub mod json;
