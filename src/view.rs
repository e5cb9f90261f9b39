//! Document view - the seam between page logic and a rendering surface
//!
//! The toggling and navigation logic never touches a concrete DOM. It
//! works against these two traits, so the same code drives a live
//! browser document (the `wasm` feature) and the in-memory document
//! used by tests and the example binary.

use crate::error::PageResult;

/// A live document exposing identifier-based element lookup and page
/// navigation.
///
/// Lookups are re-resolved on every call; implementations must not
/// cache handles on behalf of the caller.
pub trait DocumentView {
    /// Handle type for elements of this document.
    type Element: ElementView;

    /// Look up an element by identifier.
    ///
    /// Returns `None` when no element carries the identifier. Callers
    /// treat absence as a no-op, never as an error.
    fn element(&self, id: &str) -> Option<Self::Element>;

    /// Replace the current page location with `url` (full page load).
    fn navigate(&self, url: &str) -> PageResult<()>;
}

/// A handle to a single element of a document.
///
/// Covers exactly the properties the page operations need: the
/// style-visibility property, the displayed text, and the control
/// value.
pub trait ElementView {
    /// Current value of the style display property.
    ///
    /// The empty string means the element follows its stylesheet
    /// default (visible); `"none"` means hidden.
    fn display(&self) -> String;

    /// Set the style display property.
    fn set_display(&self, value: &str);

    /// Replace the element's displayed text.
    fn set_text(&self, text: &str);

    /// Current control value, for select/input elements.
    ///
    /// Elements without a value yield the empty string.
    fn value(&self) -> String;
}
