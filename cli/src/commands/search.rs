//! SEARCH command - Title search across own and public documents.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;

use super::list::ListDocumentsResponse;
use super::{HumanReadable, make_request, output};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to search document titles for
    pub query: String,
}

/// Execute the search command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: SearchArgs) -> Result<()> {
    let url = format!("{}/documents/search", base_url);

    let response: ListDocumentsResponse =
        make_request(client.get(&url).query(&[("q", &args.query)])).await?;

    if human && response.documents.is_empty() {
        println!("{}", "No matching documents".dimmed());
        return Ok(());
    }

    output(&response, human)
}
