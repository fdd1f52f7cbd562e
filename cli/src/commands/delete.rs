//! DELETE command - Permanently delete a document. Owner only.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Document ID to delete
    pub document_id: Uuid,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

/// Response from deleting a document.
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteDocumentResponse {
    pub id: Uuid,
    pub message: String,
}

impl HumanReadable for DeleteDocumentResponse {
    fn print_human(&self) {
        println!("{}", "Document deleted".green().bold());
        println!();
        println!("  {} {}", "ID:".cyan(), self.id);
    }
}

/// Execute the delete command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: DeleteArgs) -> Result<()> {
    if !args.yes {
        eprint!(
            "Permanently delete document {}? This cannot be undone. [y/N] ",
            args.document_id
        );
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            eprintln!("Aborted");
            return Ok(());
        }
    }

    let url = format!("{}/documents/{}", base_url, args.document_id);

    let response: DeleteDocumentResponse = make_request(client.delete(&url)).await?;

    output(&response, human)
}
