//! USERS command - Search users by name.
//!
//! Finds the user id to pass to `share grant`, so nobody has to copy
//! UUIDs around by hand.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{HumanReadable, make_request, output};

/// Arguments for the users command.
#[derive(Args)]
pub struct UsersArgs {
    /// Name text to search for
    pub query: String,
}

/// Response from searching users.
#[derive(Debug, Deserialize, Serialize)]
pub struct SearchUsersResponse {
    pub users: Vec<UserEntry>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UserEntry {
    pub id: Uuid,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl HumanReadable for SearchUsersResponse {
    fn print_human(&self) {
        println!("{}", "Matching Users".green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.users.is_empty() {
            println!("  {}", "(No matching users)".dimmed());
            return;
        }

        for user in &self.users {
            let name = user.display_name.as_deref().unwrap_or("(no name)");
            println!("  {}", name.bold());
            println!("    {} {}", "ID:".cyan(), user.id);
            if let Some(email) = &user.email {
                println!("    {} {}", "Email:".cyan(), email);
            }
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.users.len());
    }
}

/// Execute the users command.
pub async fn execute(client: &Client, base_url: &str, human: bool, args: UsersArgs) -> Result<()> {
    let url = format!("{}/users/search", base_url);

    let response: SearchUsersResponse =
        make_request(client.get(&url).query(&[("q", &args.query)])).await?;

    output(&response, human)
}
