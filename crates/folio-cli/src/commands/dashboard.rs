use anyhow::Result;
use comfy_table::{Cell, Table};
use folio_core::FolioCore;

use crate::output::{OutputFormat, json::print_json};

pub fn run(core: &FolioCore, format: OutputFormat) -> Result<()> {
    core.session.require_privileged()?;
    let summary = core.catalog().dashboard();

    if format.is_json() {
        return print_json(&summary);
    }

    println!("Total projects:  {}", summary.total_projects);
    println!("Active services: {}", summary.total_services);
    println!();
    println!("Recent projects");

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category"]);
    for project in &summary.recent_projects {
        table.add_row(vec![
            Cell::new(project.id),
            Cell::new(&project.title),
            Cell::new(project.category),
        ]);
    }

    crate::output::table::print_table(table)
}
