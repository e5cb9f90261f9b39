//! Report Controls Example - Client Detail Page Walkthrough

use anyhow::Result;
use report_controls::page::CLIENT_DETAIL_SECTIONS;
use report_controls::prelude::*;

fn print_snapshot(label: &str, doc: &MemoryDocument) -> Result<()> {
    println!("--- {label} ---");
    println!("{}\n", serde_json::to_string_pretty(&doc.snapshot())?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    println!("=== Report Controls Example: Client Detail Page ===\n");

    // Build the page the way the detail template renders it: the three
    // entry tables expanded, each with its plusminus indicator, plus
    // the quick-jump select pointing at another client's page.
    let mut doc = MemoryDocument::new();
    for id in CLIENT_DETAIL_SECTIONS {
        doc = doc.with_section(id, Visibility::Visible);
    }
    let doc = doc.with_value("quick_jump", "/clients/detail/prometheus");

    let page = ReportPage::new(doc);
    print_snapshot("as rendered", page.document())?;

    // The template's body onload handler folds all three tables.
    page.load_client_detail();
    print_snapshot("after client detail load", page.document())?;

    // A click on the bad-entries heading expands that table again.
    page.toggle_section("bad_table");
    print_snapshot("after expanding bad_table", page.document())?;

    // Selecting an entry in the quick-jump control navigates.
    page.jump_to_selected("quick_jump");
    match page.document().location() {
        Some(url) => println!("navigated to: {url}"),
        None => println!("no navigation happened"),
    }

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
