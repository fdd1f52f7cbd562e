//! PUBLISH command - Toggle a document's public flag. Owner only.
//!
//! The flag toggles: running the command on a public document makes it
//! private again. Making a document private does not clear its sharing
//! set; shared users keep their access.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use uuid::Uuid;

use super::list::DocumentSummary;
use super::{make_request, output};

/// Arguments for the publish command.
#[derive(Args)]
pub struct PublishArgs {
    /// Document ID to toggle visibility for
    pub document_id: Uuid,
}

/// Execute the publish command.
pub async fn execute(
    client: &Client,
    base_url: &str,
    human: bool,
    args: PublishArgs,
) -> Result<()> {
    let url = format!("{}/documents/{}/visibility", base_url, args.document_id);

    let response: DocumentSummary = make_request(client.post(&url)).await?;

    if human {
        if response.is_public {
            println!("{}", "Document is now public".green().bold());
            println!();
            println!("  Anyone with the link can read it:");
            println!("  {}/public/documents/{}", base_url, response.id);
        } else {
            println!("{}", "Document is now private".green().bold());
        }
        return Ok(());
    }

    output(&response, human)
}
