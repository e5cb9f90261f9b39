//! In-memory document view
//!
//! A small id-indexed element store that stands in for a rendered
//! page. Tests and the example binary drive the page operations
//! against it instead of a live browser document; navigation is
//! recorded rather than performed.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;

use crate::error::PageResult;
use crate::page::{Visibility, INDICATOR_PREFIX};
use crate::view::{DocumentView, ElementView};

/// Mutable state of one element.
#[derive(Debug, Default, Clone)]
struct ElementState {
    display: String,
    text: String,
    value: String,
}

/// Handle to an element of a [`MemoryDocument`].
///
/// Handles share state with the document, so mutations through a
/// handle are observable through later lookups.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    /// Current displayed text.
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    /// Set the control value (fixture setup; the page operations only
    /// ever read values).
    pub fn set_value(&self, value: &str) {
        self.state.borrow_mut().value = value.to_string();
    }
}

impl ElementView for MemoryElement {
    fn display(&self) -> String {
        self.state.borrow().display.clone()
    }

    fn set_display(&self, value: &str) {
        self.state.borrow_mut().display = value.to_string();
    }

    fn set_text(&self, text: &str) {
        self.state.borrow_mut().text = text.to_string();
    }

    fn value(&self) -> String {
        self.state.borrow().value.clone()
    }
}

/// An in-memory document: elements indexed by identifier plus the
/// recorded page location.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: BTreeMap<String, Rc<RefCell<ElementState>>>,
    location: RefCell<Option<String>>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare element with default state (visible, no text, no
    /// value).
    pub fn with_element(mut self, id: &str) -> Self {
        self.insert(id, ElementState::default());
        self
    }

    /// Add a foldable section together with its paired indicator
    /// (`plusminus_` + id), both reflecting `visibility`.
    pub fn with_section(mut self, id: &str, visibility: Visibility) -> Self {
        self.insert(
            id,
            ElementState {
                display: visibility.as_display().to_string(),
                ..ElementState::default()
            },
        );
        self.insert(
            &format!("{INDICATOR_PREFIX}{id}"),
            ElementState {
                text: visibility.indicator_label().to_string(),
                ..ElementState::default()
            },
        );
        self
    }

    /// Add a control element holding `value` (e.g. the quick-jump
    /// select).
    pub fn with_value(mut self, id: &str, value: &str) -> Self {
        self.insert(
            id,
            ElementState {
                value: value.to_string(),
                ..ElementState::default()
            },
        );
        self
    }

    fn insert(&mut self, id: &str, state: ElementState) {
        self.elements
            .insert(id.to_string(), Rc::new(RefCell::new(state)));
    }

    /// The URL of the last navigation, or `None` when no navigation
    /// happened.
    pub fn location(&self) -> Option<String> {
        self.location.borrow().clone()
    }

    /// Capture the complete observable state of the document.
    ///
    /// Elements are ordered by identifier, so two documents built and
    /// driven the same way compare equal.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            location: self.location(),
            elements: self
                .elements
                .iter()
                .map(|(id, state)| {
                    let state = state.borrow();
                    ElementSnapshot {
                        id: id.clone(),
                        display: state.display.clone(),
                        text: state.text.clone(),
                        value: state.value.clone(),
                    }
                })
                .collect(),
        }
    }
}

impl DocumentView for MemoryDocument {
    type Element = MemoryElement;

    fn element(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).map(|state| MemoryElement {
            state: Rc::clone(state),
        })
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        *self.location.borrow_mut() = Some(url.to_string());
        Ok(())
    }
}

/// Point-in-time state of a [`MemoryDocument`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub location: Option<String>,
    pub elements: Vec<ElementSnapshot>,
}

/// Observable state of one element within a [`PageSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementSnapshot {
    pub id: String,
    pub display: String,
    pub text: String,
    pub value: String,
}
