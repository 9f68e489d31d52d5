//! Purpose: Define the element capability every host adapter provides.
//! Exports: `ElementHandle`.
//! Role: Single seam between guard helpers and concrete DOM-like hosts.
//! Invariants: Methods take `&self`; hosts own their interior mutability like DOM references do.
//! Invariants: Trait methods are unconditional writes; guards live in `class` and `visibility`.

use crate::core::error::Result;

/// Class-set, attribute and inline-style operations on a host element.
///
/// Host failures are returned as-is; callers propagate them with `?`.
pub trait ElementHandle {
    fn contains_class(&self, name: &str) -> Result<bool>;

    fn add_class_token(&self, name: &str) -> Result<()>;

    fn remove_class_token(&self, name: &str) -> Result<()>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, name: &str) -> Result<()>;

    fn set_style_property(&self, name: &str, value: &str) -> Result<()>;

    /// Drop every inline style override (the whole `style` attribute).
    fn clear_inline_style(&self) -> Result<()>;
}

impl<E: ElementHandle + ?Sized> ElementHandle for &E {
    fn contains_class(&self, name: &str) -> Result<bool> {
        (**self).contains_class(name)
    }

    fn add_class_token(&self, name: &str) -> Result<()> {
        (**self).add_class_token(name)
    }

    fn remove_class_token(&self, name: &str) -> Result<()> {
        (**self).remove_class_token(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        (**self).set_attribute(name, value)
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        (**self).remove_attribute(name)
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        (**self).set_style_property(name, value)
    }

    fn clear_inline_style(&self) -> Result<()> {
        (**self).clear_inline_style()
    }
}
