//! Purpose: In-memory element and event hosts for headless use and tests.
//! Exports: `MemoryElement`, `MemoryEvent`, `Mutation`.
//! Role: Reference adapter that journals every write so callers can prove guards skip redundant work.
//! Invariants: Class tokens follow DOMTokenList rules: non-empty and free of ASCII whitespace.
//! Invariants: Only trait writes are journaled; `*_now` setup helpers are not.

use crate::core::element::ElementHandle;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::event::EventHandle;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mutation {
    AddClass(String),
    RemoveClass(String),
    SetAttribute(String, String),
    RemoveAttribute(String),
    SetStyle(String, String),
    ClearInlineStyle,
}

#[derive(Debug, Default)]
struct ElementState {
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: Vec<(String, String)>,
    journal: Vec<Mutation>,
}

#[derive(Debug, Default)]
pub struct MemoryElement {
    state: RefCell<ElementState>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let element = Self::new();
        {
            let mut state = element.state.borrow_mut();
            for class in classes {
                let class = class.into();
                if !state.classes.contains(&class) {
                    state.classes.push(class);
                }
            }
        }
        element
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    pub fn has_class_now(&self, name: &str) -> bool {
        self.state.borrow().classes.iter().any(|class| class == name)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state
            .borrow()
            .style
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.state.borrow().journal.clone()
    }

    pub fn set_attribute_now(&self, name: &str, value: &str) {
        self.state
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_style_now(&self, property: &str, value: &str) {
        upsert_style(&mut self.state.borrow_mut().style, property, value);
    }
}

fn upsert_style(style: &mut Vec<(String, String)>, property: &str, value: &str) {
    match style.iter_mut().find(|(name, _)| name == property) {
        Some(entry) => entry.1 = value.to_string(),
        None => style.push((property.to_string(), value.to_string())),
    }
}

fn validate_token(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::new(ErrorKind::Usage)
            .with_message("class token must not be empty")
            .with_hint("DOMTokenList rejects empty tokens with a SyntaxError."));
    }
    if name.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(Error::new(ErrorKind::Usage)
            .with_message(format!("class token {name:?} contains whitespace"))
            .with_hint("Pass one class per call."));
    }
    Ok(())
}

impl ElementHandle for MemoryElement {
    fn contains_class(&self, name: &str) -> Result<bool> {
        Ok(self.has_class_now(name))
    }

    fn add_class_token(&self, name: &str) -> Result<()> {
        validate_token(name)?;
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|class| class == name) {
            state.classes.push(name.to_string());
        }
        state.journal.push(Mutation::AddClass(name.to_string()));
        Ok(())
    }

    fn remove_class_token(&self, name: &str) -> Result<()> {
        validate_token(name)?;
        let mut state = self.state.borrow_mut();
        state.classes.retain(|class| class != name);
        state.journal.push(Mutation::RemoveClass(name.to_string()));
        Ok(())
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state
            .attributes
            .insert(name.to_string(), value.to_string());
        state
            .journal
            .push(Mutation::SetAttribute(name.to_string(), value.to_string()));
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.attributes.remove(name);
        state
            .journal
            .push(Mutation::RemoveAttribute(name.to_string()));
        Ok(())
    }

    fn set_style_property(&self, name: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        upsert_style(&mut state.style, name, value);
        state
            .journal
            .push(Mutation::SetStyle(name.to_string(), value.to_string()));
        Ok(())
    }

    fn clear_inline_style(&self) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.style.clear();
        state.journal.push(Mutation::ClearInlineStyle);
        Ok(())
    }
}

/// Event stand-in that counts suppression calls, optionally failing each one.
#[derive(Debug, Default)]
pub struct MemoryEvent {
    fail: bool,
    stop_calls: Cell<u32>,
    prevent_calls: Cell<u32>,
}

impl MemoryEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stop_propagation_calls(&self) -> u32 {
        self.stop_calls.get()
    }

    pub fn prevent_default_calls(&self) -> u32 {
        self.prevent_calls.get()
    }

    fn outcome(&self, op: &str) -> Result<()> {
        if self.fail {
            return Err(Error::new(ErrorKind::Host).with_message(format!("{op} rejected")));
        }
        Ok(())
    }
}

impl EventHandle for MemoryEvent {
    fn stop_propagation(&self) -> Result<()> {
        self.stop_calls.set(self.stop_calls.get() + 1);
        self.outcome("stopPropagation")
    }

    fn prevent_default(&self) -> Result<()> {
        self.prevent_calls.set(self.prevent_calls.get() + 1);
        self.outcome("preventDefault")
    }
}
