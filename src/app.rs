//! Todo Client App
//!
//! Root component: builds the view-model once and loads the list on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::components::{AddTodoForm, FilterBar, StatusMessage, TodoList, TodoStats};
use crate::config::ClientConfig;
use crate::context::provide_view_model;
use crate::view_model::TodoViewModel;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_document();
    let api = HttpTodoApi::new(config.endpoint.clone());
    log::info!("[APP] Using todo endpoint {}", api.endpoint());

    let vm = TodoViewModel::new(api, &config);
    provide_view_model(vm.clone());

    // Initial load
    Effect::new(move |_| {
        let vm = vm.clone();
        spawn_local(async move {
            vm.load().await;
        });
    });

    view! {
        <div class="container">
            <h1>"Todo List"</h1>
            <StatusMessage />
            <AddTodoForm />
            <FilterBar />
            <TodoList />
            <TodoStats />
        </div>
    }
}
