//! Add Todo Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_view_model;
use crate::view_model::submitted_title;

/// Text input + submit button for new todos
#[component]
pub fn AddTodoForm() -> impl IntoView {
    let vm = use_view_model();
    let (new_title, set_new_title) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get_untracked();
        if submitted_title(&title).is_none() {
            return;
        }
        let vm = vm.clone();
        spawn_local(async move {
            // Cleared after the attempt, successful or not
            vm.add(&title).await;
            set_new_title.set(String::new());
        });
    };

    view! {
        <form id="addTodoForm" class="add-todo-form" on:submit=on_submit>
            <input
                id="todoInput"
                type="text"
                placeholder="What needs to be done?"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
