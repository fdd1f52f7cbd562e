//! READ command - Fetch one document with its metadata and viewers.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the read command.
#[derive(Args)]
pub struct ReadArgs {
    /// Document ID to fetch
    pub document_id: Uuid,
}

/// Response from fetching a document.
#[derive(Debug, Deserialize, Serialize)]
pub struct GetDocumentResponse {
    pub id: Uuid,
    pub title: String,
    pub owner: Uuid,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub shared_with: Vec<Uuid>,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(default)]
    pub viewers: Vec<Uuid>,
}

impl HumanReadable for GetDocumentResponse {
    fn print_human(&self) {
        println!("{}", self.title.green().bold());
        println!("{}", "=".repeat(60));
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!(
            "  {} {}{}",
            "Owner:".cyan(),
            self.owner,
            if self.is_owner { " (you)" } else { "" }
        );
        println!(
            "  {} {}",
            "Visibility:".cyan(),
            if self.is_public { "public" } else { "private" }
        );
        if !self.shared_with.is_empty() {
            println!("  {} {}", "Shared with:".cyan(), self.shared_with.len());
        }
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
        println!(
            "  {} {}",
            "Modified:".cyan(),
            format_timestamp(&self.last_modified)
        );

        if self.viewers.is_empty() {
            println!("  {} {}", "Viewers:".cyan(), "(none)".dimmed());
        } else {
            println!("  {} {} currently viewing", "Viewers:".cyan(), self.viewers.len());
        }
    }
}

/// Execute the read command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ReadArgs) -> Result<()> {
    let url = format!("{}/documents/{}", base_url, args.document_id);

    let response: GetDocumentResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
