//! Todo Cache Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Todo};

/// Client-side mirror of the server's todos plus the view filter
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Cached todos in server load order, then append order
    pub todos: Vec<Todo>,
    /// Which todos the list shows
    pub filter: Filter,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Cache Mutations
// ========================

/// Replace the first todo with a matching id. Returns false if none matched.
pub fn replace_by_id(todos: &mut [Todo], updated: Todo) -> bool {
    match todos.iter_mut().find(|todo| todo.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Number of todos not yet completed
pub fn remaining(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole cache with a fresh server listing
pub fn store_replace_todos(store: &TodoStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Append a newly created todo
pub fn store_push_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Update a todo in the store by ID
pub fn store_update_todo(store: &TodoStore, updated: Todo) -> bool {
    let found = store.todos().with_untracked(|todos| todos.iter().any(|t| t.id == updated.id));
    if found {
        replace_by_id(&mut store.todos().write(), updated);
    }
    found
}

/// Remove every todo with this ID
pub fn store_remove_todo(store: &TodoStore, todo_id: i64) {
    store.todos().write().retain(|todo| todo.id != todo_id);
}
