use chrono::{DateTime, Local, Utc};
use console::style;

use crate::todo::TodoItem;

/// One listing line, e.g. `3. [x] buy milk`.
pub fn format_todo_line(item: &TodoItem) -> String {
    format!("{}. {}", item.id, item)
}

pub fn format_error_message(message: &str) -> String {
    format!("{} {}", style("Error:").red().for_stderr(), message)
}

/// Creation timestamps render in local time, date omitted for today.
pub fn format_created_at(created_utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = created_utc.into();
    let now = Local::now();

    if local.date_naive() == now.date_naive() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%b %d %H:%M").to_string()
    }
}
