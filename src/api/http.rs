//! Fetch-based implementation of [`TodoApi`]

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::form::{encode_form, FORM_CONTENT_TYPE};
use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::Todo;

/// Talks to the todo endpoint with `window.fetch`
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    endpoint: String,
}

impl HttpTodoApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one request and fail on anything but a 2xx status
    async fn send(&self, method: &str, form: Option<String>) -> ApiResult<Response> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = &form {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&self.endpoint, &opts).map_err(transport_err)?;
        if form.is_some() {
            request
                .headers()
                .set("Content-Type", FORM_CONTENT_TYPE)
                .map_err(transport_err)?;
        }

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_err)?
            .dyn_into()
            .map_err(transport_err)?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let promise = response.json().map_err(decode_err)?;
        let value = JsFuture::from(promise).await.map_err(decode_err)?;
        serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn transport_err(err: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", err))
}

fn decode_err(err: JsValue) -> ApiError {
    ApiError::Decode(format!("{:?}", err))
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> ApiResult<Vec<Todo>> {
        let response = self.send("GET", None).await?;
        Self::read_json(response).await
    }

    async fn create(&self, title: &str) -> ApiResult<Todo> {
        let body = encode_form(&[("title", title)]);
        let response = self.send("POST", Some(body)).await?;
        Self::read_json(response).await
    }

    async fn toggle(&self, id: i64) -> ApiResult<Todo> {
        let body = encode_form(&[("id", &id.to_string())]);
        let response = self.send("PUT", Some(body)).await?;
        Self::read_json(response).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let body = encode_form(&[("id", &id.to_string())]);
        self.send("DELETE", Some(body)).await?;
        Ok(())
    }
}
