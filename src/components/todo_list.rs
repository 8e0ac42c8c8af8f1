//! Todo List Component
//!
//! Renders the filtered rows as markup and handles row events through
//! one delegated listener per event type on the container.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_view_model;
use crate::render::RowAction;

#[component]
pub fn TodoList() -> impl IntoView {
    let vm = use_view_model();

    let list_html = {
        let vm = vm.clone();
        move || vm.view().to_html()
    };

    let on_change = {
        let vm = vm.clone();
        move |ev: web_sys::Event| {
            if let Some(RowAction::Toggle(id)) = row_action(&ev) {
                let vm = vm.clone();
                spawn_local(async move {
                    vm.toggle(id).await;
                });
            }
        }
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(RowAction::Delete(id)) = row_action(&ev) {
            let vm = vm.clone();
            spawn_local(async move {
                vm.remove(id, confirm_with_user).await;
            });
        }
    };

    view! {
        <div
            id="todoList"
            class="todo-list"
            inner_html=list_html
            on:change=on_change
            on:click=on_click
        />
    }
}

/// Resolve the row and control an event came from
fn row_action(ev: &web_sys::Event) -> Option<RowAction> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let control = target.closest("[data-action]").ok()??;
    let row = control.closest("[data-id]").ok()??;
    RowAction::from_attrs(&control.get_attribute("data-action")?, &row.get_attribute("data-id")?)
}

fn confirm_with_user(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}
