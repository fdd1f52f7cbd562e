//! RENAME command - Change a document's title. Owner only.

use anyhow::Result;
use clap::Args;
use reqwest::Client;
use serde::Serialize;
use uuid::Uuid;

use super::list::DocumentSummary;
use super::{make_request, output};

/// Arguments for the rename command.
#[derive(Args)]
pub struct RenameArgs {
    /// Document ID to rename
    pub document_id: Uuid,

    /// New title
    pub title: String,
}

/// Request body for renaming.
#[derive(Serialize)]
struct RenameDocumentRequest {
    title: String,
}

/// Execute the rename command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: RenameArgs) -> Result<()> {
    let url = format!("{}/documents/{}/title", base_url, args.document_id);
    let request_body = RenameDocumentRequest { title: args.title };

    let response: DocumentSummary = make_request(client.put(&url).json(&request_body)).await?;

    output(&response, human)
}
