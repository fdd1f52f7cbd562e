//! LIST command - List every document the caller may see.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    // No additional arguments needed
}

/// Response from listing documents.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListDocumentsResponse {
    pub documents: Vec<DocumentSummary>,
}

/// One document as the server reports it.
#[derive(Debug, Deserialize, Serialize)]
pub struct DocumentSummary {
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
}

impl HumanReadable for ListDocumentsResponse {
    fn print_human(&self) {
        println!("{}", "Your Documents".green().bold());
        println!("{}", "=".repeat(80));
        println!();

        if self.documents.is_empty() {
            println!("  {}", "(No documents accessible)".dimmed());
            return;
        }

        for document in &self.documents {
            let owner_indicator = if document.is_owner {
                "*".yellow()
            } else {
                " ".normal()
            };

            let visibility = if document.is_public {
                "[public]".cyan()
            } else if !document.shared_with.is_empty() {
                format!("[shared with {}]", document.shared_with.len()).normal()
            } else {
                "[private]".dimmed()
            };

            println!("  {} {} {}", owner_indicator, document.title.bold(), visibility);
            println!("    {} {}", "ID:".cyan(), document.id);
            println!(
                "    {} {}",
                "Modified:".cyan(),
                format_timestamp(&document.last_modified)
            );
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.documents.len());
        println!();
        println!("  {}", "* = You are the owner".dimmed());
    }
}

/// Execute the list command.
pub async fn execute(client: &Client, base_url: &str, human: bool, _args: ListArgs) -> Result<()> {
    let url = format!("{}/documents", base_url);

    let response: ListDocumentsResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
