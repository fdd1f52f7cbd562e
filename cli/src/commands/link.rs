//! LINK command - Fetch a document over the public share-link surface.
//!
//! Uses no credentials, so it shows exactly what an anonymous visitor
//! would see. A private document reads as not available here even when
//! the caller could fetch it through the authenticated surface.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, format_timestamp, make_request, output};

/// Arguments for the link command.
#[derive(Args)]
pub struct LinkArgs {
    /// Document ID to fetch anonymously
    pub document_id: Uuid,
}

/// Response from the public surface.
#[derive(Debug, Deserialize, Serialize)]
pub struct PublicDocumentResponse {
    pub id: Uuid,
    pub title: String,
    pub owner: Uuid,
    pub created: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl HumanReadable for PublicDocumentResponse {
    fn print_human(&self) {
        println!("{} {}", self.title.green().bold(), "[public]".cyan());
        println!("{}", "=".repeat(60));
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
        println!("  {} {}", "Owner:".cyan(), self.owner);
        println!("  {} {}", "Created:".cyan(), format_timestamp(&self.created));
        println!(
            "  {} {}",
            "Modified:".cyan(),
            format_timestamp(&self.last_modified)
        );
    }
}

/// Execute the link command.
pub async fn execute(base_url: &str, human: bool, args: LinkArgs) -> Result<()> {
    // Fresh client without credentials; this surface is anonymous.
    let client = reqwest::Client::new();
    let url = format!("{}/public/documents/{}", base_url, args.document_id);

    let response: PublicDocumentResponse = make_request(client.get(&url)).await?;

    output(&response, human)
}
