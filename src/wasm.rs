//! WASM bindings for the report page controls
//!
//! This module backs the [`crate::view::DocumentView`] seam with the
//! live browser document and exports the page operations under the
//! names the report templates already wire to `onclick`/`onchange`
//! attributes: `toggleMe`, `hide_table_array`, `clientdetailload` and
//! `pageJump`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::error::{PageError, PageResult};
use crate::page::ReportPage;
use crate::view::{DocumentView, ElementView};

// Use wee_alloc for a smaller WASM binary
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Install the panic hook so failures show up readably in the browser
/// console. Runs once when the module is loaded.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

// ========================
// Browser-backed document
// ========================

/// The live browser document as a [`DocumentView`].
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    /// Attach to the current browsing context.
    ///
    /// Fails when the module runs outside a browsing context (no
    /// `window` or no `document`), e.g. in a worker.
    pub fn attach() -> PageResult<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PageError::DocumentUnavailable)?;
        Ok(Self { document })
    }
}

impl DocumentView for BrowserDocument {
    type Element = BrowserElement;

    fn element(&self, id: &str) -> Option<BrowserElement> {
        self.document
            .get_element_by_id(id)
            .map(|element| BrowserElement { element })
    }

    fn navigate(&self, url: &str) -> PageResult<()> {
        let window = web_sys::window().ok_or(PageError::DocumentUnavailable)?;
        window
            .location()
            .set_href(url)
            .map_err(|err| PageError::Navigation {
                url: url.to_string(),
                reason: format!("{err:?}"),
            })
    }
}

/// Handle to a live DOM element.
pub struct BrowserElement {
    element: web_sys::Element,
}

impl BrowserElement {
    /// Inline style declaration, for elements that carry one.
    fn style(&self) -> Option<CssStyleDeclaration> {
        self.element
            .dyn_ref::<HtmlElement>()
            .map(|element| element.style())
    }
}

impl ElementView for BrowserElement {
    fn display(&self) -> String {
        self.style()
            .and_then(|style| style.get_property_value("display").ok())
            .unwrap_or_default()
    }

    fn set_display(&self, value: &str) {
        if let Some(style) = self.style() {
            let _ = style.set_property("display", value);
        }
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn value(&self) -> String {
        if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        // Other element kinds: read the property reflectively, the way
        // the markup-side callers would.
        js_sys::Reflect::get(self.element.as_ref(), &JsValue::from_str("value"))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }
}

// ========================
// Template-facing exports
// ========================

/// Run `op` against the live page, or report why that is impossible.
fn with_page(op: impl FnOnce(&ReportPage<BrowserDocument>)) {
    match BrowserDocument::attach() {
        Ok(doc) => op(&ReportPage::new(doc)),
        Err(err) => web_sys::console::warn_1(&format!("report-controls: {err}").into()),
    }
}

/// Flip the visibility of one section and its `plusminus_` indicator.
#[wasm_bindgen(js_name = toggleMe)]
pub fn toggle_me(element_id: &str) {
    with_page(|page| page.toggle_section(element_id));
}

/// Flip every section named in `element_ids`, in order.
///
/// Non-string entries are skipped.
#[wasm_bindgen(js_name = hide_table_array)]
pub fn hide_table_array(element_ids: js_sys::Array) {
    with_page(|page| {
        for entry in element_ids.iter() {
            if let Some(id) = entry.as_string() {
                page.toggle_section(&id);
            }
        }
    });
}

/// Fold the bad/modified/extra tables of a client detail page.
#[wasm_bindgen(js_name = clientdetailload)]
pub fn client_detail_load() {
    with_page(|page| page.load_client_detail());
}

/// Navigate to the URL currently selected in the control `element_id`.
#[wasm_bindgen(js_name = pageJump)]
pub fn page_jump(element_id: &str) {
    with_page(|page| page.jump_to_selected(element_id));
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
