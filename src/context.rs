//! Application Context
//!
//! The page's single view-model, provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::view_model::TodoViewModel;

/// View-model backed by the real HTTP API
pub type AppViewModel = TodoViewModel<HttpTodoApi>;

pub fn provide_view_model(vm: AppViewModel) {
    provide_context(vm);
}

/// Get the view-model from context
pub fn use_view_model() -> AppViewModel {
    use_context::<AppViewModel>().expect("TodoViewModel should be provided")
}
