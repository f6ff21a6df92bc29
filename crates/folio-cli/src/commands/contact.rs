use anyhow::{Result, bail};
use colored::Colorize;
use folio_core::contact::{ContactMessage, QUICK_REPLIES, whatsapp_link};
use serde_json::json;

use crate::cli::{ContactArgs, ContactCommands};
use crate::commands::utils::format_timestamp;
use crate::config::CliConfig;
use crate::output::{OutputFormat, json::print_json};

pub fn run(config: &CliConfig, command: ContactCommands, format: OutputFormat) -> Result<()> {
    match command {
        ContactCommands::Link { message } => print_link(config, &message, format),
        ContactCommands::Replies => list_replies(config, format),
        ContactCommands::Send(args) => send_message(args, format),
    }
}

fn print_link(config: &CliConfig, message: &str, format: OutputFormat) -> Result<()> {
    let Some(link) = whatsapp_link(config.whatsapp_number(), message) else {
        bail!("Message is empty");
    };

    if format.is_json() {
        return print_json(&json!({ "link": link }));
    }

    println!("{link}");
    Ok(())
}

fn list_replies(config: &CliConfig, format: OutputFormat) -> Result<()> {
    let replies: Vec<_> = QUICK_REPLIES
        .iter()
        .filter_map(|reply| {
            whatsapp_link(config.whatsapp_number(), reply)
                .map(|link| json!({ "message": reply, "link": link }))
        })
        .collect();

    if format.is_json() {
        return print_json(&replies);
    }

    for (index, reply) in QUICK_REPLIES.iter().enumerate() {
        println!("{}. {}", index + 1, reply);
    }
    Ok(())
}

fn send_message(args: ContactArgs, format: OutputFormat) -> Result<()> {
    let message = ContactMessage {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    let receipt = message.submit()?;

    if format.is_json() {
        return print_json(&receipt);
    }

    println!(
        "{} Message received at {}",
        "✓".green(),
        format_timestamp(Some(receipt.received_at))
    );
    println!(
        "{}",
        "Note: contact form messages are not delivered anywhere yet.".dimmed()
    );
    Ok(())
}
