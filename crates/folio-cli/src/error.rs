use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("not authenticated") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Start an admin session with:");
        eprintln!("  {} folio login", "$".dimmed());
    }

    if msg.contains("invalid credentials") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Check the username and password and try again.");
    }

    if msg.contains("projects record") && msg.contains("not found") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  List available projects with:");
        eprintln!("  {} folio project list", "$".dimmed());
    }

    if msg.contains("services record") && msg.contains("not found") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  List available services with:");
        eprintln!("  {} folio service list", "$".dimmed());
    }

    if msg.contains("storage unavailable") || msg.contains("database already open") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Make sure no other folio process is using the profile.");
    }

    std::process::exit(1);
}
