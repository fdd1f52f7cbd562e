//! SHARE command - Manage a document's sharing set. Owner only.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the share command.
#[derive(Args)]
pub struct ShareArgs {
    /// Document ID to manage sharing for
    pub document_id: Uuid,

    #[command(subcommand)]
    pub action: ShareAction,
}

#[derive(Subcommand)]
pub enum ShareAction {
    /// Grant a user read/write access
    Grant {
        /// User ID to grant access to
        user_id: Uuid,
    },

    /// Revoke a user's access
    Revoke {
        /// User ID to revoke access from
        user_id: Uuid,
    },

    /// List users the document is shared with
    List,
}

/// Request body for granting access.
#[derive(Serialize)]
struct GrantShareRequest {
    user_id: Uuid,
}

/// Response from grant and revoke.
#[derive(Debug, Deserialize, Serialize)]
pub struct ShareResponse {
    pub shared_with: Vec<Uuid>,
}

/// Response from listing grants.
#[derive(Debug, Deserialize, Serialize)]
pub struct ListSharesResponse {
    pub shares: Vec<ShareGrant>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ShareGrant {
    pub user_id: Uuid,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl HumanReadable for ShareResponse {
    fn print_human(&self) {
        println!("{}", "Sharing updated".green().bold());
        println!();
        if self.shared_with.is_empty() {
            println!("  {}", "(Not shared with anyone)".dimmed());
        } else {
            println!("  {} {}", "Shared with:".cyan(), self.shared_with.len());
            for user in &self.shared_with {
                println!("    {}", user);
            }
        }
    }
}

impl HumanReadable for ListSharesResponse {
    fn print_human(&self) {
        println!("{}", "Document Sharing".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.shares.is_empty() {
            println!("  {}", "(Not shared with anyone)".dimmed());
            return;
        }

        for grant in &self.shares {
            let name = grant
                .display_name
                .as_deref()
                .unwrap_or("(unknown user)");
            println!("  {}", name.bold());
            println!("    {} {}", "ID:".cyan(), grant.user_id);
            if let Some(email) = &grant.email {
                println!("    {} {}", "Email:".cyan(), email);
            }
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.shares.len());
    }
}

/// Execute the share command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: ShareArgs) -> Result<()> {
    match args.action {
        ShareAction::Grant { user_id } => {
            let url = format!("{}/documents/{}/share", base_url, args.document_id);
            let request_body = GrantShareRequest { user_id };
            let response: ShareResponse =
                make_request(client.post(&url).json(&request_body)).await?;
            output(&response, human)
        }

        ShareAction::Revoke { user_id } => {
            let url = format!(
                "{}/documents/{}/share/{}",
                base_url, args.document_id, user_id
            );
            let response: ShareResponse = make_request(client.delete(&url)).await?;
            output(&response, human)
        }

        ShareAction::List => {
            let url = format!("{}/documents/{}/share", base_url, args.document_id);
            let response: ListSharesResponse = make_request(client.get(&url)).await?;
            output(&response, human)
        }
    }
}
