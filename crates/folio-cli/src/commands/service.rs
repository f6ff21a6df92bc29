use anyhow::{Result, anyhow};
use colored::Colorize;
use comfy_table::{Cell, Table};
use folio_core::{CollectionName, FolioCore, Service, ServiceDraft, StoreError};
use serde_json::json;

use crate::cli::{ServiceCommands, ServiceFields};
use crate::commands::utils::preview_text;
use crate::output::{OutputFormat, json::print_json};

pub fn run(core: &FolioCore, command: ServiceCommands, format: OutputFormat) -> Result<()> {
    match command {
        ServiceCommands::List => list_services(core, format),
        ServiceCommands::Show { id } => show_service(core, id, format),
        ServiceCommands::Add(fields) => add_service(core, fields, format),
        ServiceCommands::Edit { id, fields } => edit_service(core, id, fields, format),
        ServiceCommands::Delete { id } => delete_service(core, id, format),
    }
}

fn list_services(core: &FolioCore, format: OutputFormat) -> Result<()> {
    let services = core.catalog().services();

    if format.is_json() {
        return print_json(&services);
    }

    if services.is_empty() {
        println!("No services");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Icon", "Price", "Features"]);
    for service in &services {
        table.add_row(vec![
            Cell::new(service.id),
            Cell::new(&service.title),
            Cell::new(service.display_icon().label()),
            Cell::new(&service.price),
            Cell::new(preview_text(&service.features.join(", "), 50)),
        ]);
    }

    crate::output::table::print_table(table)
}

fn find_service(core: &FolioCore, id: i64) -> Result<Service> {
    core.content
        .services()
        .find(id)
        .cloned()
        .ok_or_else(|| {
            anyhow!(StoreError::NotFound {
                collection: CollectionName::Services,
                id,
            })
        })
}

fn show_service(core: &FolioCore, id: i64, format: OutputFormat) -> Result<()> {
    let service = find_service(core, id)?;

    if format.is_json() {
        return print_json(&service);
    }

    print_service(&service);
    Ok(())
}

fn add_service(core: &FolioCore, fields: ServiceFields, format: OutputFormat) -> Result<()> {
    let editor = core.editor()?;
    let mut draft = ServiceDraft::default();
    fields.apply(&mut draft);
    let service = editor.create_service(draft)?;

    if format.is_json() {
        return print_json(&service);
    }

    println!("{} Created service {}", "✓".green(), service.id);
    print_service(&service);
    Ok(())
}

fn edit_service(
    core: &FolioCore,
    id: i64,
    fields: ServiceFields,
    format: OutputFormat,
) -> Result<()> {
    let editor = core.editor()?;
    let current = find_service(core, id)?;
    let mut draft = ServiceDraft::from_service(&current);
    fields.apply(&mut draft);
    let service = editor.update_service(id, draft)?;

    if format.is_json() {
        return print_json(&service);
    }

    println!("{} Updated service {}", "✓".green(), service.id);
    print_service(&service);
    Ok(())
}

fn delete_service(core: &FolioCore, id: i64, format: OutputFormat) -> Result<()> {
    let editor = core.editor()?;
    let deleted = editor.delete_service(id)?;

    if format.is_json() {
        return print_json(&json!({ "id": id, "deleted": deleted }));
    }

    if deleted {
        println!("{} Deleted service {}", "✓".green(), id);
    } else {
        println!("No service with id {id}");
    }
    Ok(())
}

fn print_service(service: &Service) {
    println!("ID:          {}", service.id);
    println!("Title:       {}", service.title);
    println!(
        "Icon:        {} ({})",
        service.display_icon().label(),
        service.icon
    );
    println!("Description: {}", service.description);
    println!("Price:       {}", service.price);
    if !service.features.is_empty() {
        println!("Features:");
        for feature in &service.features {
            println!("  - {feature}");
        }
    }
}

impl ServiceFields {
    /// Overwrite the draft with every field given on the command line.
    pub fn apply(self, draft: &mut ServiceDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(icon) = self.icon {
            draft.icon = icon;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(features) = self.features {
            draft.features = features;
        }
    }
}
