//! UI Components
//!
//! Leptos components bound to the page's view-model.

mod add_todo_form;
mod filter_bar;
mod status_message;
mod todo_list;
mod todo_stats;

pub use add_todo_form::AddTodoForm;
pub use filter_bar::FilterBar;
pub use status_message::StatusMessage;
pub use todo_list::TodoList;
pub use todo_stats::TodoStats;
