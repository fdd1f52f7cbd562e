//! Command-line interface for the Quill document platform.
//!
//! This CLI tool provides commands for all document operations:
//! - create: Create new documents
//! - list: List accessible documents
//! - search: Search document titles
//! - read: Retrieve a document with metadata and viewers
//! - rename: Change a document's title
//! - publish: Toggle public visibility
//! - share: Manage per-document sharing
//! - delete: Permanently delete a document
//! - link: Fetch a document anonymously through its public link
//!
//! Configuration via environment:
//! - QUILL_URL: Base URL of the quill server (default: http://localhost:3000)
//! - QUILL_TOKEN: JWT Bearer token for authentication

mod commands;

use clap::{Parser, Subcommand};

use commands::{
    create::CreateArgs, delete::DeleteArgs, link::LinkArgs, list::ListArgs, publish::PublishArgs,
    read::ReadArgs, rename::RenameArgs, search::SearchArgs, share::ShareArgs, users::UsersArgs,
};

/// Quill document platform CLI
///
/// Interact with documents from the command line. Designed for both
/// scripts (JSON output) and humans (--human flag for formatted output).
#[derive(Parser)]
#[command(name = "quill")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Quill server URL
    #[arg(
        long,
        env = "QUILL_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    url: String,

    /// JWT Bearer token for authentication
    #[arg(long, env = "QUILL_TOKEN", global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new document
    Create(CreateArgs),

    /// List accessible documents
    List(ListArgs),

    /// Search document titles
    Search(SearchArgs),

    /// Read a document with its metadata
    Read(ReadArgs),

    /// Rename a document
    Rename(RenameArgs),

    /// Toggle a document's public visibility
    Publish(PublishArgs),

    /// Manage document sharing
    Share(ShareArgs),

    /// Search users by name (to find someone to share with)
    Users(UsersArgs),

    /// Delete a document
    Delete(DeleteArgs),

    /// Fetch a document through its public link, without credentials
    Link(LinkArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = match commands::build_client(cli.token.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Create(args) => {
            commands::create::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Search(args) => {
            commands::search::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Read(args) => commands::read::execute(&client, &cli.url, cli.human, args).await,
        Commands::Rename(args) => {
            commands::rename::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Publish(args) => {
            commands::publish::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Share(args) => commands::share::execute(&client, &cli.url, cli.human, args).await,
        Commands::Users(args) => commands::users::execute(&client, &cli.url, cli.human, args).await,
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
        Commands::Link(args) => commands::link::execute(&cli.url, cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
