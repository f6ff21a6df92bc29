use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use folio_core::{CategoryFilter, CollectionName};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version, about = "Folio - portfolio site content manager")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Profile database path (defaults to ~/.folio/folio.db)
    #[arg(long, global = true, env = "FOLIO_DB_PATH")]
    pub db_path: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show profile, session, and collection status
    Status,

    /// Start an admin session (placeholder gate, not a security boundary)
    Login(LoginArgs),

    /// End the admin session
    Logout,

    /// Project management
    Project {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Service management
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },

    /// Show the admin dashboard overview
    Dashboard,

    /// Restore a collection to its default content
    Reset {
        /// Collection to reset (projects or services)
        collection: CollectionName,
    },

    /// Contact form and chat widget helpers
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

#[derive(Args)]
pub struct LoginArgs {
    /// Admin username
    #[arg(short, long, default_value = "admin")]
    pub username: String,

    /// Admin password (prompted when omitted)
    #[arg(short, long, env = "FOLIO_ADMIN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects as shown on the public page
    List {
        /// Filter tab: All or a category name
        #[arg(short, long, default_value = "All")]
        category: CategoryFilter,
    },

    /// List the filter tabs
    Categories,

    /// Show a single project
    Show { id: i64 },

    /// Create a project
    Add(ProjectFields),

    /// Edit a project; omitted fields keep their current value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project
    Delete { id: i64 },
}

#[derive(Args, Default)]
pub struct ProjectFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Web Development, Mobile App, Cybersecurity, or System Automation
    #[arg(long)]
    pub category: Option<String>,

    /// Cover image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Comma-separated technologies, e.g. "Vue, Firebase"
    #[arg(long)]
    pub tech_stack: Option<String>,

    #[arg(long)]
    pub live_url: Option<String>,

    #[arg(long)]
    pub repo_url: Option<String>,
}

#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List services as shown on the public page
    List,

    /// Show a single service
    Show { id: i64 },

    /// Create a service
    Add(ServiceFields),

    /// Edit a service; omitted fields keep their current value
    Edit {
        id: i64,
        #[command(flatten)]
        fields: ServiceFields,
    },

    /// Delete a service
    Delete { id: i64 },
}

#[derive(Args, Default)]
pub struct ServiceFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// web, security, mobile, automation, software, or consulting
    #[arg(long)]
    pub icon: Option<String>,

    /// Price label, e.g. "Start from $500"
    #[arg(long)]
    pub price: Option<String>,

    /// Comma-separated feature list
    #[arg(long)]
    pub features: Option<String>,
}

#[derive(Subcommand)]
pub enum ContactCommands {
    /// Print the chat widget link for a message
    Link {
        /// Message to pre-fill
        message: String,
    },

    /// List the chat widget quick replies
    Replies,

    /// Submit the contact form (handled locally, nothing is sent)
    Send(ContactArgs),
}

#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub subject: String,

    #[arg(long)]
    pub message: String,
}
