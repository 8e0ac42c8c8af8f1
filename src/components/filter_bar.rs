//! Filter Bar Component
//!
//! One button per filter mode; the selected one is highlighted.

use leptos::prelude::*;

use crate::context::use_view_model;
use crate::models::Filter;
use crate::store::TodoStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let vm = use_view_model();
    let state = vm.state();

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(|filter| {
                let vm = vm.clone();
                let btn_class = move || {
                    if state.filter().get() == filter { "filter-btn active" } else { "filter-btn" }
                };
                view! {
                    <button
                        type="button"
                        class=btn_class
                        data-filter=filter.as_str()
                        on:click=move |_| vm.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
