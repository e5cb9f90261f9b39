//! End-to-end behavior of the client detail page controls, driven
//! against the in-memory document view.

use report_controls::page::CLIENT_DETAIL_SECTIONS;
use report_controls::prelude::*;

/// Build the client detail page the way the template renders it:
/// bad/modified/extra tables with paired indicators, a summary row
/// without an indicator, and the quick-jump select.
fn client_detail_page(tables: Visibility, jump_target: &str) -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    for id in CLIENT_DETAIL_SECTIONS {
        doc = doc.with_section(id, tables);
    }
    doc.with_element("summary_row")
        .with_value("quick_jump", jump_target)
}

#[test]
fn client_detail_load_folds_and_unfolds_everything() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, ""));

    // Page load: all three tables collapse, indicators flip to [+].
    page.load_client_detail();
    for id in CLIENT_DETAIL_SECTIONS {
        assert_eq!(page.visibility(id), Some(Visibility::Hidden), "{id}");
        let indicator = page.document().element(&format!("plusminus_{id}")).unwrap();
        assert_eq!(indicator.text(), "[+]", "{id}");
    }

    // A second load expands them again, indicators back to [–].
    page.load_client_detail();
    for id in CLIENT_DETAIL_SECTIONS {
        assert_eq!(page.visibility(id), Some(Visibility::Visible), "{id}");
        let indicator = page.document().element(&format!("plusminus_{id}")).unwrap();
        assert_eq!(indicator.text(), "[–]", "{id}");
    }
}

#[test]
fn client_detail_load_on_prefolded_page_expands() {
    // Templates may render the tables already collapsed.
    let page = ReportPage::new(client_detail_page(Visibility::Hidden, ""));

    page.load_client_detail();
    for id in CLIENT_DETAIL_SECTIONS {
        assert_eq!(page.visibility(id), Some(Visibility::Visible), "{id}");
    }
}

#[test]
fn folding_a_group_matches_sequential_folds() {
    let grouped = ReportPage::new(client_detail_page(Visibility::Visible, ""));
    let sequential = ReportPage::new(client_detail_page(Visibility::Visible, ""));

    grouped.toggle_sections(&CLIENT_DETAIL_SECTIONS);
    for id in CLIENT_DETAIL_SECTIONS {
        sequential.toggle_section(id);
    }

    let grouped_state = grouped.document().snapshot();
    let sequential_state = sequential.document().snapshot();
    eprintln!("group fold end state: {grouped_state:?}");
    assert_eq!(grouped_state, sequential_state);
}

#[test]
fn repeated_ids_in_a_group_cancel_out() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, ""));
    let untouched = client_detail_page(Visibility::Visible, "");

    // Two toggles per id land back on the starting state.
    page.toggle_sections(&["bad_table", "bad_table", "extra_table", "extra_table"]);
    assert_eq!(page.document().snapshot(), untouched.snapshot());
}

#[test]
fn unknown_ids_in_a_group_are_skipped() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, ""));

    page.toggle_sections(&["bad_table", "not_on_this_page", "extra_table"]);

    assert_eq!(page.visibility("bad_table"), Some(Visibility::Hidden));
    assert_eq!(page.visibility("extra_table"), Some(Visibility::Hidden));
    assert_eq!(page.visibility("modified_table"), Some(Visibility::Visible));
}

#[test]
fn summary_row_without_indicator_still_folds() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, ""));

    page.toggle_section("summary_row");
    assert_eq!(page.visibility("summary_row"), Some(Visibility::Hidden));

    page.toggle_section("summary_row");
    assert_eq!(page.visibility("summary_row"), Some(Visibility::Visible));
}

#[test]
fn quick_jump_navigates_to_the_selected_url() {
    let page = ReportPage::new(client_detail_page(
        Visibility::Visible,
        "http://example.com/x",
    ));

    page.jump_to_selected("quick_jump");
    assert_eq!(
        page.document().location(),
        Some("http://example.com/x".to_string())
    );
}

#[test]
fn quick_jump_with_no_selection_stays_put() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, ""));

    page.jump_to_selected("quick_jump");
    assert_eq!(page.document().location(), None);

    // Absent control behaves the same.
    page.jump_to_selected("quick_jump_footer");
    assert_eq!(page.document().location(), None);
}

#[test]
fn folding_never_touches_unrelated_elements() {
    let page = ReportPage::new(client_detail_page(Visibility::Visible, "/clients/zeus"));
    let before = page.document().snapshot();

    page.toggle_section("bad_table");
    page.toggle_section("bad_table");

    // Round trip: the whole page is byte-for-byte back where it started.
    assert_eq!(page.document().snapshot(), before);
}
