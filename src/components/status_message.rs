//! Status Message Component
//!
//! Shows the current notice and hides it again after the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_view_model;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let vm = use_view_model();
    let notice = vm.notice();
    let delay_ms = u32::try_from(vm.notice_duration().as_millis()).unwrap_or(u32::MAX);

    // Each notice gets its own timer; a replaced notice ignores its timer
    Effect::new(move |_| {
        if let Some(seq) = notice.with(|n| n.as_ref().map(|n| n.seq)) {
            let vm = vm.clone();
            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                vm.dismiss_notice(seq);
            });
        }
    });

    view! {
        <div
            id="message"
            class=move || notice.with(|n| n.as_ref().map_or_else(|| "message hidden".to_string(), |n| n.css_class()))
        >
            {move || notice.with(|n| n.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}
