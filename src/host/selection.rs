//! Purpose: jQuery-style wrapper that applies element operations to a set of handles.
//! Exports: `Selection`.
//! Role: Second host shape behind `ElementHandle`, so guard helpers need no wrapper-specific copy.
//! Invariants: Class queries answer "any member"; writes fan out to every member in order.
//! Invariants: Per-member class writes are themselves guarded; members already in the target state are untouched.
//! Invariants: The first member error aborts the fan-out and is returned unchanged.

use crate::core::element::ElementHandle;
use crate::core::error::Result;

#[derive(Clone, Debug, Default)]
pub struct Selection<E> {
    elements: Vec<E>,
}

impl<E: ElementHandle> Selection<E> {
    pub fn new(elements: Vec<E>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.elements.iter()
    }

    pub fn into_inner(self) -> Vec<E> {
        self.elements
    }

    fn each(&self, mut op: impl FnMut(&E) -> Result<()>) -> Result<()> {
        for element in &self.elements {
            op(element)?;
        }
        Ok(())
    }
}

impl<E: ElementHandle> FromIterator<E> for Selection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<E: ElementHandle> ElementHandle for Selection<E> {
    fn contains_class(&self, name: &str) -> Result<bool> {
        for element in &self.elements {
            if element.contains_class(name)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn add_class_token(&self, name: &str) -> Result<()> {
        self.each(|element| {
            if element.contains_class(name)? {
                return Ok(());
            }
            element.add_class_token(name)
        })
    }

    fn remove_class_token(&self, name: &str) -> Result<()> {
        self.each(|element| {
            if !element.contains_class(name)? {
                return Ok(());
            }
            element.remove_class_token(name)
        })
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.each(|element| element.set_attribute(name, value))
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.each(|element| element.remove_attribute(name))
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        self.each(|element| element.set_style_property(name, value))
    }

    fn clear_inline_style(&self) -> Result<()> {
        self.each(|element| element.clear_inline_style())
    }
}
