//! Report Controls - interactive behaviors for configuration report pages
//!
//! The report site renders per-client detail pages and entry listings
//! as static markup; this library supplies the client-side behaviors
//! those pages wire to event attributes:
//! - Folding table sections (bad/modified/extra entry tables and
//!   friends), with a paired `[+]`/`[–]` indicator per section
//! - Folding a whole group of sections in one call
//! - The client-detail page load fold
//! - Quick-jump navigation from a select holding URLs
//!
//! The logic is written against the [`view::DocumentView`] seam. The
//! `wasm` feature provides the live-browser backing and exports the
//! operations under the names the templates expect (`toggleMe`,
//! `hide_table_array`, `clientdetailload`, `pageJump`); natively the
//! same logic runs against [`memory::MemoryDocument`].
//!
//! ## Example
//! ```rust
//! use report_controls::prelude::*;
//!
//! let doc = MemoryDocument::new()
//!     .with_section("bad_table", Visibility::Visible)
//!     .with_value("quick_jump", "/clients/prometheus");
//!
//! let page = ReportPage::new(doc);
//!
//! // Fold the bad-entries table; its indicator follows.
//! page.toggle_section("bad_table");
//! assert_eq!(page.visibility("bad_table"), Some(Visibility::Hidden));
//!
//! // Jump to whatever the quick-jump select holds.
//! page.jump_to_selected("quick_jump");
//! assert_eq!(page.document().location(), Some("/clients/prometheus".into()));
//! ```

pub mod error;
pub mod memory;
pub mod page;
pub mod view;

// Re-export common types
pub mod prelude {
    pub use crate::error::{PageError, PageResult};
    pub use crate::memory::{ElementSnapshot, MemoryDocument, PageSnapshot};
    pub use crate::page::{ReportPage, Visibility};
    pub use crate::view::{DocumentView, ElementView};
}

#[cfg(feature = "wasm")]
pub mod wasm;
