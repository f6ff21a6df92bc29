use anyhow::{Result, bail};
use colored::Colorize;
use folio_core::FolioCore;
use serde_json::json;

use crate::cli::LoginArgs;
use crate::output::{OutputFormat, json::print_json};

pub fn login(core: &FolioCore, args: LoginArgs, format: OutputFormat) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ")?,
    };

    if !core.session.login(&args.username, &password)? {
        bail!("Invalid credentials");
    }

    if format.is_json() {
        return print_json(&json!({ "authenticated": true }));
    }

    println!("{} Logged in as {}", "✓".green(), args.username);
    println!(
        "{}",
        "Note: the admin gate only hides the editor; it is not a security boundary.".dimmed()
    );
    Ok(())
}

pub fn logout(core: &FolioCore, format: OutputFormat) -> Result<()> {
    core.session.logout()?;

    if format.is_json() {
        return print_json(&json!({ "authenticated": false }));
    }

    println!("Logged out");
    Ok(())
}
