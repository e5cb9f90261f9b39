//! Report page operations - section folding and quick-jump navigation
//!
//! The report site renders collapsible table sections (the bad,
//! modified and extra entry tables on a client detail page, grouped
//! entry listings elsewhere) with a small `[+]`/`[–]` indicator next to
//! each heading, plus a quick-jump select whose options hold URLs.
//! Everything here is stateless: element references are re-resolved on
//! each call and nothing is cached between calls.

use crate::view::{DocumentView, ElementView};

/// Style display value that hides an element.
pub const HIDDEN_DISPLAY: &str = "none";

/// Style display value that shows an element again (stylesheet default).
pub const VISIBLE_DISPLAY: &str = "";

/// Identifier prefix of the indicator element paired with a section.
///
/// A section `bad_table` is expected to pair with `plusminus_bad_table`.
pub const INDICATOR_PREFIX: &str = "plusminus_";

/// Indicator label shown while a section is collapsed.
pub const COLLAPSED_LABEL: &str = "[+]";

/// Indicator label shown while a section is expanded (en dash).
pub const EXPANDED_LABEL: &str = "[–]";

/// The three sections folded together when a client detail page loads.
pub const CLIENT_DETAIL_SECTIONS: [&str; 3] = ["bad_table", "modified_table", "extra_table"];

/// Visibility state of an element, as encoded in its display property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl Visibility {
    /// Decode a display value. Exactly `"none"` counts as hidden;
    /// every other value (including the empty string) is visible.
    pub fn from_display(value: &str) -> Self {
        if value == HIDDEN_DISPLAY {
            Visibility::Hidden
        } else {
            Visibility::Visible
        }
    }

    /// Display value that encodes this state.
    pub fn as_display(self) -> &'static str {
        match self {
            Visibility::Visible => VISIBLE_DISPLAY,
            Visibility::Hidden => HIDDEN_DISPLAY,
        }
    }

    /// The opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    /// Indicator label mirroring this state.
    pub fn indicator_label(self) -> &'static str {
        match self {
            Visibility::Visible => EXPANDED_LABEL,
            Visibility::Hidden => COLLAPSED_LABEL,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    pub fn is_hidden(self) -> bool {
        self == Visibility::Hidden
    }
}

/// A report page seen through a document view.
///
/// Wraps any [`DocumentView`] and provides the interactive behaviors
/// the page templates wire to event attributes: folding sections,
/// folding groups of sections, the client-detail load fold, and the
/// quick-jump navigation.
///
/// Every operation degrades to a no-op when an element is missing;
/// none of them return errors or panic.
pub struct ReportPage<D: DocumentView> {
    doc: D,
}

impl<D: DocumentView> ReportPage<D> {
    /// Wrap a document view.
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    /// Access the underlying document view.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Flip the visibility of a single section.
    ///
    /// A visible section becomes hidden and vice versa. The paired
    /// indicator (`plusminus_` + id) follows: `[+]` while collapsed,
    /// `[–]` while expanded. A missing section makes the whole call a
    /// no-op; a missing indicator skips only the label update.
    pub fn toggle_section(&self, id: &str) {
        if let Some(section) = self.doc.element(id) {
            let next = Visibility::from_display(&section.display()).flipped();
            section.set_display(next.as_display());

            if let Some(indicator) = self.doc.element(&format!("{INDICATOR_PREFIX}{id}")) {
                indicator.set_text(next.indicator_label());
            }
        }
    }

    /// Flip every section in `ids`, in order.
    ///
    /// Each toggle is independent; the end state equals the same
    /// toggles applied one by one.
    pub fn toggle_sections<S: AsRef<str>>(&self, ids: &[S]) {
        for id in ids {
            self.toggle_section(id.as_ref());
        }
    }

    /// Fold the three entry tables of a client detail page.
    ///
    /// Called when the page loads so the bad, modified and extra
    /// tables start collapsed; calling it again expands them. The
    /// section identifiers are fixed by the page templates.
    pub fn load_client_detail(&self) {
        self.toggle_sections(&CLIENT_DETAIL_SECTIONS);
    }

    /// Navigate to the URL held by the control `id`.
    ///
    /// Reads the control's current value and, when it is non-empty,
    /// replaces the page location with it (full page load). A missing
    /// control or an empty value leaves the page where it is.
    pub fn jump_to_selected(&self, id: &str) {
        if let Some(control) = self.doc.element(id) {
            let url = control.value();
            if !url.is_empty() {
                if let Err(err) = self.doc.navigate(&url) {
                    log::warn!("quick jump failed: {err}");
                }
            }
        }
    }

    /// Current visibility of the element `id`, or `None` when absent.
    pub fn visibility(&self, id: &str) -> Option<Visibility> {
        self.doc
            .element(id)
            .map(|section| Visibility::from_display(&section.display()))
    }
}
