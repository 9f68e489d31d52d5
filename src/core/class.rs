//! Purpose: Guarded class-set mutation helpers.
//! Exports: `has_class`, `add_class`, `remove_class`.
//! Role: Skip host writes that would not change the class set.
//! Invariants: A write happens only when membership actually changes.

use crate::core::element::ElementHandle;
use crate::core::error::Result;

pub fn has_class<E: ElementHandle + ?Sized>(element: &E, name: &str) -> Result<bool> {
    element.contains_class(name)
}

pub fn add_class<E: ElementHandle + ?Sized>(element: &E, name: &str) -> Result<()> {
    if has_class(element, name)? {
        return Ok(());
    }
    element.add_class_token(name)
}

pub fn remove_class<E: ElementHandle + ?Sized>(element: &E, name: &str) -> Result<()> {
    if !has_class(element, name)? {
        return Ok(());
    }
    element.remove_class_token(name)
}
