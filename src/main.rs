mod cli;
mod client;
mod config;
mod display;
mod todo;

use anyhow::{Result, bail};
use clap::Parser;
use dialoguer::{Confirm, Input, Select};

use cli::{Cli, Command};
use client::{ApiClient, is_not_found};
use config::ApiConfig;
use display::{format_created_at, format_error_message, format_todo_line};
use todo::{StatusFilter, TodoItem};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // One client per process; handlers borrow it.
    let config = ApiConfig::resolve(cli.api_url);
    let client = ApiClient::new(&config)?;

    match cli.command {
        None => cmd_interactive(&client).await?,
        Some(Command::Add { description }) => {
            cmd_add(&client, &joined_description(&description)?).await?
        }
        Some(Command::List { status }) => {
            let filter: StatusFilter = match status {
                Some(s) => s.parse()?,
                None => StatusFilter::All,
            };
            cmd_list(&client, filter).await?
        }
        Some(Command::Complete { id }) => cmd_complete(&client, id).await?,
        Some(Command::Update { id, description }) => {
            cmd_update(&client, id, &joined_description(&description)?).await?
        }
        Some(Command::Delete { id }) => cmd_delete(&client, id).await?,
    }

    Ok(())
}

fn joined_description(words: &[String]) -> Result<String> {
    let description = words.join(" ");
    if description.trim().is_empty() {
        bail!("description cannot be empty");
    }
    Ok(description)
}

async fn cmd_add(client: &ApiClient, description: &str) -> Result<()> {
    let item = client.create_todo(description).await?;
    println!("Added: \"{}\" (ID: {})", item.description, item.id);
    Ok(())
}

async fn cmd_list(client: &ApiClient, filter: StatusFilter) -> Result<()> {
    let todos = client.list_todos(filter).await?;

    if todos.is_empty() {
        println!("Your todo list is empty.");
        return Ok(());
    }

    for item in &todos {
        println!("{}", format_todo_line(item));
    }
    Ok(())
}

async fn cmd_complete(client: &ApiClient, id: u64) -> Result<()> {
    match client.complete_todo(id).await {
        Ok(item) => println!("Marked as complete: \"{}\"", item.description),
        Err(e) if is_not_found(&e) => bail!("no todo item found with ID {}", id),
        Err(e) => return Err(e),
    }
    Ok(())
}

async fn cmd_update(client: &ApiClient, id: u64, description: &str) -> Result<()> {
    match client.update_todo(id, description).await {
        Ok(item) => println!("Updated: \"{}\"", item.description),
        Err(e) if is_not_found(&e) => bail!("no todo item found with ID {}", id),
        Err(e) => return Err(e),
    }
    Ok(())
}

async fn cmd_delete(client: &ApiClient, id: u64) -> Result<()> {
    let item = match client.get_todo(id).await {
        Ok(item) => item,
        Err(e) if is_not_found(&e) => bail!("no todo item found with ID {}", id),
        Err(e) => return Err(e),
    };

    if !Confirm::new()
        .with_prompt(format!(
            "Delete \"{}\" (created {})?",
            item.description,
            format_created_at(item.created_at)
        ))
        .default(false)
        .interact()?
    {
        println!("Cancelled");
        return Ok(());
    }

    client.delete_todo(id).await?;
    println!("Deleted: \"{}\"", item.description);
    Ok(())
}

async fn cmd_interactive(client: &ApiClient) -> Result<()> {
    println!("Welcome to the console todo application!");
    println!("Server: {}", client.base_url());

    loop {
        let actions = [
            "Add a todo",
            "List todos",
            "Complete a todo",
            "Update a todo",
            "Delete a todo",
            "Quit",
        ];
        let Some(selection) = Select::new()
            .with_prompt("What would you like to do?")
            .items(&actions)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        let result = match selection {
            0 => interactive_add(client).await,
            1 => cmd_list(client, StatusFilter::All).await,
            2 => interactive_complete(client).await,
            3 => interactive_update(client).await,
            4 => interactive_delete(client).await,
            _ => return Ok(()),
        };

        // Keep the loop alive on failures, like any shell would.
        if let Err(e) = result {
            eprintln!("{}", format_error_message(&e.to_string()));
        }
    }
}

async fn select_todo(
    client: &ApiClient,
    filter: StatusFilter,
    prompt: &str,
) -> Result<Option<TodoItem>> {
    let todos = client.list_todos(filter).await?;
    if todos.is_empty() {
        println!("Your todo list is empty.");
        return Ok(None);
    }

    let items: Vec<String> = todos.iter().map(format_todo_line).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| todos[i].clone()))
}

async fn interactive_add(client: &ApiClient) -> Result<()> {
    let description: String = Input::new().with_prompt("Description").interact_text()?;
    if description.trim().is_empty() {
        bail!("description cannot be empty");
    }
    cmd_add(client, &description).await
}

async fn interactive_complete(client: &ApiClient) -> Result<()> {
    let Some(item) = select_todo(client, StatusFilter::Pending, "Select todo to complete").await?
    else {
        return Ok(());
    };
    cmd_complete(client, item.id).await
}

async fn interactive_update(client: &ApiClient) -> Result<()> {
    let Some(item) = select_todo(client, StatusFilter::All, "Select todo to update").await? else {
        return Ok(());
    };

    let description: String = Input::new()
        .with_prompt("New description")
        .with_initial_text(item.description)
        .interact_text()?;
    if description.trim().is_empty() {
        bail!("description cannot be empty");
    }
    cmd_update(client, item.id, &description).await
}

async fn interactive_delete(client: &ApiClient) -> Result<()> {
    let Some(item) = select_todo(client, StatusFilter::All, "Select todo to delete").await? else {
        return Ok(());
    };
    cmd_delete(client, item.id).await
}
