use clap::{Parser, Subcommand};

use crate::config::BASE_URL_ENV;

#[derive(Parser)]
#[command(name = "todo", version)]
#[command(about = "Console todo client - manage tasks on a shared todo API server")]
pub struct Cli {
    /// Base URL of the todo API server (shared with the web front-end)
    #[arg(long, env = BASE_URL_ENV, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a new todo item
    Add {
        /// Description of the new item
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// List todo items
    List {
        /// Only show items with this status (all, pending or completed)
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a todo item as completed
    Complete {
        /// ID of the item to complete
        id: u64,
    },
    /// Update a todo item's description
    Update {
        /// ID of the item to update
        id: u64,
        /// New description
        #[arg(required = true)]
        description: Vec<String>,
    },
    /// Delete a todo item
    Delete {
        /// ID of the item to delete
        id: u64,
    },
}
