//! Todo API Wrappers
//!
//! Frontend bindings to the REST todo endpoint.

mod form;
mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::Todo;

pub use http::HttpTodoApi;

/// Remote todo collection
///
/// Every call suspends until the server answers or the transport fails.
/// Single-threaded target, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Fetch every todo in server order
    async fn list(&self) -> ApiResult<Vec<Todo>>;

    /// Create a todo; the server assigns the id
    async fn create(&self, title: &str) -> ApiResult<Todo>;

    /// Flip the completed flag and return the updated record
    async fn toggle(&self, id: i64) -> ApiResult<Todo>;

    async fn delete(&self, id: i64) -> ApiResult<()>;
}
