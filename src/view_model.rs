//! Todo View-Model
//!
//! Owns the cached todos, the active filter and the current notice, and
//! keeps the cache in step with the server one request at a time.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::TodoApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{Filter, Todo};
use crate::notice::{Action, Notice, NoticeKind};
use crate::render::TodoListView;
use crate::store::{
    store_push_todo, store_remove_todo, store_replace_todos, store_update_todo, TodoState,
    TodoStateStoreFields, TodoStore,
};

/// Prompt shown before deleting a todo
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

/// Title as it will be sent, or None when the input is blank
pub fn submitted_title(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|title| !title.is_empty())
}

/// One per page session; cloning shares the same state.
pub struct TodoViewModel<A> {
    api: Arc<A>,
    state: TodoStore,
    notice: RwSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
    notice_duration: Duration,
}

impl<A> Clone for TodoViewModel<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: self.state,
            notice: self.notice,
            notice_seq: self.notice_seq,
            notice_duration: self.notice_duration,
        }
    }
}

impl<A: TodoApi> TodoViewModel<A> {
    pub fn new(api: A, config: &ClientConfig) -> Self {
        Self {
            api: Arc::new(api),
            state: Store::new(TodoState::default()),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
            notice_duration: config.notice_duration,
        }
    }

    pub fn state(&self) -> TodoStore {
        self.state
    }

    pub fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice.read_only()
    }

    pub fn notice_duration(&self) -> Duration {
        self.notice_duration
    }

    /// Current projection of the cache; tracked when read inside a view
    pub fn view(&self) -> TodoListView {
        self.state.with(|state| TodoListView::project(&state.todos, state.filter))
    }

    /// Replace the cache with the server's list
    pub async fn load(&self) {
        log::debug!("[VM] Loading todos");
        match self.api.list().await {
            Ok(todos) => {
                log::info!("[VM] Loaded {} todos", todos.len());
                store_replace_todos(&self.state, todos);
            }
            Err(err) => self.report_failure(Action::Load, &err),
        }
    }

    /// Create a todo from user input. Returns true once the server accepted it.
    ///
    /// Blank titles are dropped without contacting the server.
    pub async fn add(&self, title: &str) -> bool {
        let Some(title) = submitted_title(title) else {
            return false;
        };

        log::debug!("[VM] Adding todo {:?}", title);
        match self.api.create(title).await {
            Ok(todo) => {
                log::info!("[VM] Added todo {}", todo.id);
                store_push_todo(&self.state, todo);
                self.report_success(Action::Add);
                true
            }
            Err(err) => {
                self.report_failure(Action::Add, &err);
                false
            }
        }
    }

    /// Ask the server to flip a todo and mirror its answer
    pub async fn toggle(&self, id: i64) {
        log::debug!("[VM] Toggling todo {}", id);
        match self.api.toggle(id).await {
            Ok(todo) => self.apply_toggled(id, todo),
            Err(err) => self.report_failure(Action::Update, &err),
        }
    }

    // A todo missing from the cache stays missing until the next load.
    fn apply_toggled(&self, id: i64, todo: Todo) {
        if store_update_todo(&self.state, todo) {
            log::info!("[VM] Updated todo {}", id);
        } else {
            log::debug!("[VM] Todo {} not cached, update dropped", id);
        }
    }

    /// Delete a todo after the user confirms
    pub async fn remove(&self, id: i64, confirm: impl FnOnce(&str) -> bool) {
        if !confirm(DELETE_PROMPT) {
            log::debug!("[VM] Delete of todo {} declined", id);
            return;
        }

        log::debug!("[VM] Deleting todo {}", id);
        match self.api.delete(id).await {
            Ok(()) => {
                log::info!("[VM] Deleted todo {}", id);
                store_remove_todo(&self.state, id);
                self.report_success(Action::Delete);
            }
            Err(err) => self.report_failure(Action::Delete, &err),
        }
    }

    pub fn set_filter(&self, filter: Filter) {
        log::debug!("[VM] Filter set to {}", filter);
        self.state.filter().set(filter);
    }

    /// Clear the notice, unless a newer one has replaced it
    pub fn dismiss_notice(&self, seq: u64) {
        let current = self.notice.with_untracked(|n| n.as_ref().map(|n| n.seq));
        if current == Some(seq) {
            self.notice.set(None);
        }
    }

    fn report_success(&self, action: Action) {
        if let Some(text) = action.success_message() {
            self.show_notice(NoticeKind::Success, text);
        }
    }

    fn report_failure(&self, action: Action, err: &ApiError) {
        log::warn!("[VM] {:?} failed: {}", action, err);
        self.show_notice(NoticeKind::Error, action.failure_message(err));
    }

    fn show_notice(&self, kind: NoticeKind, text: &str) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let seq = self.notice_seq.get_value();
        self.notice.set(Some(Notice { seq, kind, text: text.to_string() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiResult;
    use crate::render::items_left;
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};

    /// In-memory server that records every request it receives
    #[derive(Default)]
    struct FakeApi {
        todos: RefCell<Vec<Todo>>,
        next_id: Cell<i64>,
        fail_with: RefCell<Option<ApiError>>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeApi {
        fn with_todos(todos: Vec<Todo>) -> Self {
            let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
            Self {
                todos: RefCell::new(todos),
                next_id: Cell::new(next_id),
                ..Default::default()
            }
        }

        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match self.fail_with.borrow().clone() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TodoApi for FakeApi {
        async fn list(&self) -> ApiResult<Vec<Todo>> {
            self.record("list".into())?;
            Ok(self.todos.borrow().clone())
        }

        async fn create(&self, title: &str) -> ApiResult<Todo> {
            self.record(format!("create {}", title))?;
            self.next_id.set(self.next_id.get() + 1);
            let todo = Todo { id: self.next_id.get(), title: title.to_string(), completed: false };
            self.todos.borrow_mut().push(todo.clone());
            Ok(todo)
        }

        async fn toggle(&self, id: i64) -> ApiResult<Todo> {
            self.record(format!("toggle {}", id))?;
            let mut todos = self.todos.borrow_mut();
            let todo = todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(ApiError::Status(404))?;
            todo.completed = !todo.completed;
            Ok(todo.clone())
        }

        async fn delete(&self, id: i64) -> ApiResult<()> {
            self.record(format!("delete {}", id))?;
            self.todos.borrow_mut().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo { id, title: title.to_string(), completed }
    }

    fn view_model(api: FakeApi) -> TodoViewModel<FakeApi> {
        TodoViewModel::new(api, &ClientConfig::default())
    }

    fn cached(vm: &TodoViewModel<FakeApi>) -> Vec<Todo> {
        vm.state().todos().get_untracked()
    }

    fn calls(vm: &TodoViewModel<FakeApi>) -> Vec<String> {
        vm.api.calls.borrow().clone()
    }

    fn notice_text(vm: &TodoViewModel<FakeApi>) -> Option<String> {
        vm.notice().get_untracked().map(|n| n.text)
    }

    #[tokio::test]
    async fn test_load_replaces_cache_in_order() {
        let server = vec![todo(3, "c", false), todo(1, "a", true), todo(2, "b", false)];
        let vm = view_model(FakeApi::with_todos(server.clone()));
        store_replace_todos(&vm.state(), vec![todo(99, "stale", false)]);

        vm.load().await;

        assert_eq!(cached(&vm), server);
        assert_eq!(notice_text(&vm), None);
    }

    #[tokio::test]
    async fn test_load_failure_keeps_cache() {
        let vm = view_model(FakeApi::default());
        store_replace_todos(&vm.state(), vec![todo(1, "keep", false)]);
        *vm.api.fail_with.borrow_mut() = Some(ApiError::Status(500));

        vm.load().await;

        assert_eq!(cached(&vm), vec![todo(1, "keep", false)]);
        let notice = vm.notice().get_untracked().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Failed to load todos");
    }

    #[tokio::test]
    async fn test_blank_titles_never_reach_server() {
        let vm = view_model(FakeApi::default());

        assert!(!vm.add("").await);
        assert!(!vm.add("   ").await);

        assert!(calls(&vm).is_empty());
        assert!(cached(&vm).is_empty());
        assert_eq!(notice_text(&vm), None);
    }

    #[tokio::test]
    async fn test_add_appends_server_record() {
        let vm = view_model(FakeApi::with_todos(vec![todo(4, "first", false)]));
        vm.load().await;

        assert!(vm.add("  Buy milk  ").await);

        assert_eq!(cached(&vm), vec![todo(4, "first", false), todo(5, "Buy milk", false)]);
        assert_eq!(calls(&vm), vec!["list", "create Buy milk"]);
        assert_eq!(notice_text(&vm).as_deref(), Some("Todo added!"));
    }

    #[tokio::test]
    async fn test_add_failure_leaves_cache() {
        let vm = view_model(FakeApi::default());
        *vm.api.fail_with.borrow_mut() = Some(ApiError::Transport("offline".into()));

        assert!(!vm.add("Buy milk").await);

        assert!(cached(&vm).is_empty());
        assert_eq!(notice_text(&vm).as_deref(), Some("Error adding todo"));
    }

    #[tokio::test]
    async fn test_failed_add_still_counts_as_submitted() {
        let vm = view_model(FakeApi::default());
        *vm.api.fail_with.borrow_mut() = Some(ApiError::Status(500));

        // The form clears its input for any submitted title, whatever the outcome
        assert_eq!(submitted_title("  Buy milk "), Some("Buy milk"));
        assert!(!vm.add("  Buy milk ").await);

        assert_eq!(calls(&vm), vec!["create Buy milk"]);
        assert!(cached(&vm).is_empty());
        assert_eq!(notice_text(&vm).as_deref(), Some("Failed to add todo"));
        assert_eq!(submitted_title("   "), None);
        assert_eq!(submitted_title(""), None);
    }

    #[tokio::test]
    async fn test_remaining_count_tracks_adds() {
        let vm = view_model(FakeApi::default());

        for (n, title) in ["a", "b", "c"].into_iter().enumerate() {
            vm.add(title).await;
            let incomplete = cached(&vm).iter().filter(|t| !t.completed).count();
            assert_eq!(incomplete, n + 1);
            assert_eq!(vm.view().remaining, incomplete);
        }
        assert_eq!(items_left(vm.view().remaining), "3 items left");
    }

    #[tokio::test]
    async fn test_toggle_replaces_in_place() {
        let vm = view_model(FakeApi::with_todos(vec![
            todo(1, "a", false),
            todo(2, "b", false),
            todo(3, "c", true),
        ]));
        vm.load().await;

        vm.toggle(2).await;

        assert_eq!(
            cached(&vm),
            vec![todo(1, "a", false), todo(2, "b", true), todo(3, "c", true)]
        );
        assert_eq!(items_left(vm.view().remaining), "1 item left");
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_dropped() {
        // Server knows todo 8, the cache does not
        let vm = view_model(FakeApi::with_todos(vec![todo(8, "remote", false)]));
        store_replace_todos(&vm.state(), vec![todo(1, "local", false)]);

        vm.toggle(8).await;

        assert_eq!(calls(&vm), vec!["toggle 8"]);
        assert_eq!(cached(&vm), vec![todo(1, "local", false)]);
        assert_eq!(notice_text(&vm), None);
    }

    #[tokio::test]
    async fn test_toggle_failure_reports() {
        let vm = view_model(FakeApi::with_todos(vec![todo(1, "a", false)]));
        vm.load().await;
        *vm.api.fail_with.borrow_mut() = Some(ApiError::Status(409));

        vm.toggle(1).await;

        assert_eq!(cached(&vm), vec![todo(1, "a", false)]);
        assert_eq!(notice_text(&vm).as_deref(), Some("Failed to update todo"));
    }

    #[tokio::test]
    async fn test_declined_remove_changes_nothing() {
        let vm = view_model(FakeApi::with_todos(vec![todo(1, "a", false), todo(2, "b", true)]));
        vm.load().await;
        let before = vm.view().to_html();
        let mut prompt = String::new();

        vm.remove(1, |text| {
            prompt = text.to_string();
            false
        })
        .await;

        assert_eq!(prompt, DELETE_PROMPT);
        assert_eq!(calls(&vm), vec!["list"]);
        assert_eq!(vm.view().to_html(), before);
        assert_eq!(cached(&vm).len(), 2);
    }

    #[tokio::test]
    async fn test_confirmed_remove_drops_all_matches() {
        let vm = view_model(FakeApi::with_todos(vec![todo(2, "b", false)]));
        store_replace_todos(
            &vm.state(),
            vec![todo(2, "b", false), todo(5, "e", false), todo(2, "dup", true)],
        );

        vm.remove(2, |_| true).await;

        assert_eq!(calls(&vm), vec!["delete 2"]);
        assert_eq!(cached(&vm), vec![todo(5, "e", false)]);
        assert_eq!(notice_text(&vm).as_deref(), Some("Todo deleted!"));
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_todo() {
        let vm = view_model(FakeApi::with_todos(vec![todo(1, "a", false)]));
        vm.load().await;
        *vm.api.fail_with.borrow_mut() = Some(ApiError::Status(500));

        vm.remove(1, |_| true).await;

        assert_eq!(cached(&vm), vec![todo(1, "a", false)]);
        assert_eq!(notice_text(&vm).as_deref(), Some("Failed to delete todo"));
    }

    #[tokio::test]
    async fn test_set_filter_renders_without_request() {
        let vm = view_model(FakeApi::with_todos(vec![todo(1, "a", false), todo(2, "b", true)]));
        vm.load().await;
        let ids = |vm: &TodoViewModel<FakeApi>| -> Vec<i64> {
            vm.view().rows.iter().map(|row| row.id).collect()
        };

        vm.set_filter(Filter::Active);
        assert_eq!(ids(&vm), vec![1]);
        vm.set_filter(Filter::Completed);
        assert_eq!(ids(&vm), vec![2]);
        vm.set_filter(Filter::All);
        assert_eq!(ids(&vm), vec![1, 2]);

        assert_eq!(calls(&vm), vec!["list"]);
    }

    #[tokio::test]
    async fn test_newer_notice_survives_stale_dismissal() {
        let vm = view_model(FakeApi::default());
        vm.add("a").await;
        let first = vm.notice().get_untracked().unwrap().seq;
        vm.remove(1, |_| true).await;
        let second = vm.notice().get_untracked().unwrap().seq;
        assert!(second > first);

        vm.dismiss_notice(first);
        assert_eq!(notice_text(&vm).as_deref(), Some("Todo deleted!"));

        vm.dismiss_notice(second);
        assert_eq!(notice_text(&vm), None);
    }
}
