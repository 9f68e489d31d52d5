//! Purpose: Hide and show elements while keeping ARIA state in sync.
//! Exports: `hide_element`, `show_element`, `is_hidden`, `VisibilityOptions`.
//! Role: The marker class is the single source of truth for "hidden".
//! Invariants: Hiding a hidden element (or showing a visible one) performs no host write.
//! Invariants: Showing clears the whole inline `style` attribute, not just the forced properties.

use crate::core::class::{has_class, remove_class};
use crate::core::element::ElementHandle;
use crate::core::error::Result;
use crate::json::{JsonData, from_json_as};
use serde::Deserialize;
use tracing::trace;

pub const HIDDEN_CLASS: &str = "hidden";
pub const ARIA_HIDDEN: &str = "aria-hidden";

/// Knobs for [`hide_element_with`] and [`show_element_with`].
///
/// Missing fields take their defaults, so partial JSON configuration is accepted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct VisibilityOptions {
    pub hidden_class: String,
    pub aria_attribute: String,
    /// Force `display: none` and `visibility: hidden` inline when hiding.
    pub inline_style: bool,
}

impl VisibilityOptions {
    pub fn new() -> Self {
        Self {
            hidden_class: HIDDEN_CLASS.to_string(),
            aria_attribute: ARIA_HIDDEN.to_string(),
            inline_style: true,
        }
    }

    /// Malformed or absent input yields the defaults.
    pub fn from_json(input: impl Into<JsonData<VisibilityOptions>>) -> Self {
        from_json_as(input.into())
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_hidden<E: ElementHandle + ?Sized>(element: &E) -> Result<bool> {
    has_class(element, HIDDEN_CLASS)
}

pub fn hide_element<E: ElementHandle + ?Sized>(element: &E) -> Result<()> {
    hide_element_with(element, &VisibilityOptions::default())
}

pub fn show_element<E: ElementHandle + ?Sized>(element: &E) -> Result<()> {
    show_element_with(element, &VisibilityOptions::default())
}

pub fn hide_element_with<E: ElementHandle + ?Sized>(
    element: &E,
    options: &VisibilityOptions,
) -> Result<()> {
    if has_class(element, &options.hidden_class)? {
        return Ok(());
    }
    trace!(class = %options.hidden_class, "hiding element");
    element.add_class_token(&options.hidden_class)?;
    element.set_attribute(&options.aria_attribute, "true")?;
    if options.inline_style {
        element.set_style_property("display", "none")?;
        element.set_style_property("visibility", "hidden")?;
    }
    Ok(())
}

pub fn show_element_with<E: ElementHandle + ?Sized>(
    element: &E,
    options: &VisibilityOptions,
) -> Result<()> {
    if !has_class(element, &options.hidden_class)? {
        return Ok(());
    }
    trace!(class = %options.hidden_class, "showing element");
    remove_class(element, &options.hidden_class)?;
    element.remove_attribute(&options.aria_attribute)?;
    element.clear_inline_style()
}
