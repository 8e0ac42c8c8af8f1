//! Todo Stats Component

use leptos::prelude::*;

use crate::context::use_view_model;
use crate::render::items_left;
use crate::store::{remaining, TodoStateStoreFields};

/// "N items left" counter over the whole cache
#[component]
pub fn TodoStats() -> impl IntoView {
    let todos = use_view_model().state().todos();

    view! {
        <div id="stats" class="stats">
            {move || todos.with(|todos| items_left(remaining(todos)))}
        </div>
    }
}
