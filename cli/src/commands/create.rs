//! CREATE command - Create a new document.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::Serialize;

use super::list::DocumentSummary;
use super::{HumanReadable, make_request, output};

/// Arguments for the create command.
#[derive(Args)]
pub struct CreateArgs {
    /// Title for the new document
    pub title: String,

    /// Make the document publicly readable from the start
    #[arg(long)]
    pub public: bool,
}

/// Request body for creating a document.
#[derive(Serialize)]
struct CreateDocumentRequest {
    title: String,
    is_public: bool,
}

impl HumanReadable for DocumentSummary {
    fn print_human(&self) {
        println!("{}", "Document".green().bold());
        println!();
        println!("  {} {}", "Title:".cyan(), self.title.bold());
        println!("  {} {}", "ID:".cyan(), self.id);
        println!(
            "  {} {}",
            "Visibility:".cyan(),
            if self.is_public { "public" } else { "private" }
        );
        if !self.shared_with.is_empty() {
            println!("  {} {}", "Shared with:".cyan(), self.shared_with.len());
        }
    }
}

/// Execute the create command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: CreateArgs) -> Result<()> {
    let url = format!("{}/documents", base_url);
    let request_body = CreateDocumentRequest {
        title: args.title,
        is_public: args.public,
    };

    let response: DocumentSummary = make_request(client.post(&url).json(&request_body)).await?;

    output(&response, human)
}
