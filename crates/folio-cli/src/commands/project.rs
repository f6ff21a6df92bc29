use anyhow::{Result, anyhow};
use colored::Colorize;
use comfy_table::{Cell, Table};
use folio_core::{CategoryFilter, CollectionName, FolioCore, Project, ProjectDraft, StoreError};
use serde_json::json;

use crate::cli::{ProjectCommands, ProjectFields};
use crate::commands::utils::{or_dash, preview_text};
use crate::output::{OutputFormat, json::print_json};

pub fn run(core: &FolioCore, command: ProjectCommands, format: OutputFormat) -> Result<()> {
    match command {
        ProjectCommands::List { category } => list_projects(core, category, format),
        ProjectCommands::Categories => list_categories(format),
        ProjectCommands::Show { id } => show_project(core, id, format),
        ProjectCommands::Add(fields) => add_project(core, fields, format),
        ProjectCommands::Edit { id, fields } => edit_project(core, id, fields, format),
        ProjectCommands::Delete { id } => delete_project(core, id, format),
    }
}

fn list_projects(core: &FolioCore, filter: CategoryFilter, format: OutputFormat) -> Result<()> {
    let projects = core.catalog().projects_in(filter);

    if format.is_json() {
        return print_json(&projects);
    }

    if projects.is_empty() {
        println!("No projects in {filter}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Category", "Tech Stack", "Description"]);
    for project in &projects {
        table.add_row(vec![
            Cell::new(project.id),
            Cell::new(&project.title),
            Cell::new(project.category),
            Cell::new(project.tech_stack.join(", ")),
            Cell::new(preview_text(&project.description, 50)),
        ]);
    }

    crate::output::table::print_table(table)
}

fn list_categories(format: OutputFormat) -> Result<()> {
    let tabs: Vec<String> = CategoryFilter::tabs()
        .iter()
        .map(ToString::to_string)
        .collect();

    if format.is_json() {
        return print_json(&tabs);
    }

    for tab in tabs {
        println!("{tab}");
    }
    Ok(())
}

fn find_project(core: &FolioCore, id: i64) -> Result<Project> {
    core.content
        .projects()
        .find(id)
        .cloned()
        .ok_or_else(|| {
            anyhow!(StoreError::NotFound {
                collection: CollectionName::Projects,
                id,
            })
        })
}

fn show_project(core: &FolioCore, id: i64, format: OutputFormat) -> Result<()> {
    let project = find_project(core, id)?;

    if format.is_json() {
        return print_json(&project);
    }

    print_project(&project);
    Ok(())
}

fn add_project(core: &FolioCore, fields: ProjectFields, format: OutputFormat) -> Result<()> {
    let editor = core.editor()?;
    let mut draft = ProjectDraft::default();
    fields.apply(&mut draft);
    let project = editor.create_project(draft)?;

    if format.is_json() {
        return print_json(&project);
    }

    println!("{} Created project {}", "✓".green(), project.id);
    print_project(&project);
    Ok(())
}

fn edit_project(
    core: &FolioCore,
    id: i64,
    fields: ProjectFields,
    format: OutputFormat,
) -> Result<()> {
    let editor = core.editor()?;
    let current = find_project(core, id)?;
    let mut draft = ProjectDraft::from_project(&current);
    fields.apply(&mut draft);
    let project = editor.update_project(id, draft)?;

    if format.is_json() {
        return print_json(&project);
    }

    println!("{} Updated project {}", "✓".green(), project.id);
    print_project(&project);
    Ok(())
}

fn delete_project(core: &FolioCore, id: i64, format: OutputFormat) -> Result<()> {
    let editor = core.editor()?;
    let deleted = editor.delete_project(id)?;

    if format.is_json() {
        return print_json(&json!({ "id": id, "deleted": deleted }));
    }

    if deleted {
        println!("{} Deleted project {}", "✓".green(), id);
    } else {
        println!("No project with id {id}");
    }
    Ok(())
}

fn print_project(project: &Project) {
    let tech_stack = project.tech_stack.join(", ");
    println!("ID:          {}", project.id);
    println!("Title:       {}", project.title);
    println!("Category:    {}", project.category);
    println!("Description: {}", project.description);
    println!("Image:       {}", project.image);
    println!("Tech Stack:  {}", or_dash(Some(&tech_stack)));
    println!("Live URL:    {}", or_dash(project.live_url.as_deref()));
    println!("Repo URL:    {}", or_dash(project.repo_url.as_deref()));
}

impl ProjectFields {
    /// Overwrite the draft with every field given on the command line.
    pub fn apply(self, draft: &mut ProjectDraft) {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(category) = self.category {
            draft.category = category;
        }
        if let Some(image) = self.image {
            draft.image = image;
        }
        if let Some(tech_stack) = self.tech_stack {
            draft.tech_stack = tech_stack;
        }
        if let Some(live_url) = self.live_url {
            draft.live_url = live_url;
        }
        if let Some(repo_url) = self.repo_url {
            draft.repo_url = repo_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_overrides_given_fields() {
        let mut draft = ProjectDraft {
            title: "Old".to_string(),
            description: "Kept".to_string(),
            tech_stack: "Rust".to_string(),
            ..Default::default()
        };

        ProjectFields {
            title: Some("New".to_string()),
            tech_stack: Some("Vue, Firebase".to_string()),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.title, "New");
        assert_eq!(draft.description, "Kept");
        assert_eq!(draft.tech_stack, "Vue, Firebase");
    }
}
