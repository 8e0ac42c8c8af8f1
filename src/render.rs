//! List Rendering
//!
//! Pure projection of the cached todos into list markup. Rows carry
//! `data-id` / `data-action` attributes instead of inline handlers; the list
//! container interprets them through [`RowAction`].

use crate::models::{Filter, Todo};
use crate::store::remaining;

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

/// Everything the list and the counter display for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub rows: Vec<TodoRow>,
    /// Set only when no row passes the filter
    pub empty_message: Option<&'static str>,
    /// Incomplete todos across the whole cache, regardless of filter
    pub remaining: usize,
}

impl TodoListView {
    pub fn project(todos: &[Todo], filter: Filter) -> Self {
        let rows: Vec<TodoRow> = todos
            .iter()
            .filter(|todo| filter.matches(todo))
            .map(|todo| TodoRow {
                id: todo.id,
                title: todo.title.clone(),
                completed: todo.completed,
            })
            .collect();
        let empty_message = rows.is_empty().then(|| empty_message(filter));

        Self { rows, empty_message, remaining: remaining(todos) }
    }

    /// Inner markup of the list container
    pub fn to_html(&self) -> String {
        if let Some(message) = self.empty_message {
            return format!(r#"<div class="empty-state">{}</div>"#, escape_html(message));
        }
        self.rows.iter().map(TodoRow::to_html).collect()
    }
}

impl TodoRow {
    fn to_html(&self) -> String {
        let (row_class, checked) = if self.completed {
            ("todo-item completed", " checked")
        } else {
            ("todo-item", "")
        };
        format!(
            concat!(
                r#"<div class="{}" data-id="{}">"#,
                r#"<input type="checkbox" data-action="toggle"{}>"#,
                r#"<span class="todo-title">{}</span>"#,
                r#"<button class="btn-delete" data-action="delete">×</button>"#,
                "</div>",
            ),
            row_class,
            self.id,
            checked,
            escape_html(&self.title),
        )
    }
}

/// Placeholder shown when the filtered list is empty
pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet. Add one above!",
        Filter::Active => "No active todos. Great job! 🎉",
        Filter::Completed => "No completed todos yet. Check the box to mark as complete!",
    }
}

pub fn items_left(count: usize) -> String {
    format!("{} {} left", count, if count == 1 { "item" } else { "items" })
}

/// Escape text for insertion into element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// What a delegated list event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Toggle(i64),
    Delete(i64),
}

impl RowAction {
    /// Decode the `data-action` / `data-id` pair found around an event target
    pub fn from_attrs(action: &str, id: &str) -> Option<Self> {
        let id = id.parse().ok()?;
        match action {
            "toggle" => Some(RowAction::Toggle(id)),
            "delete" => Some(RowAction::Delete(id)),
            _ => None,
        }
    }
}
