//! Browser HTTP client for the storefront REST API.
//!
//! Every request goes to `SHOPFRONT_API_URL` (see `ApiConfig`) with cookies
//! included, so the API's session cookie travels with each call. When the
//! signed-in session carries an access token it is sent as a bearer token.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use shopfront_common::auth::{AuthSession, MessageResponse};
use shopfront_common::config::ApiConfig;
use shopfront_common::error::ApiError;
use shopfront_common::product::ProductId;
use shopfront_common::wishlist::{wishlist_item_path, WishlistApi};

use super::auth_state::use_auth;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from compile-time env vars.
    pub fn from_env() -> Self {
        Self {
            config: ApiConfig::from_env(),
            token: None,
        }
    }

    /// Attach the session's access token, if any.
    pub fn with_session(mut self, session: Option<&AuthSession>) -> Self {
        self.token = session.and_then(|s| s.access_token.clone());
        self
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.send("GET", path, None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let text = self.send("POST", path, Some(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let text = self.send("PATCH", path, Some(body)).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// POST with no body, ignoring whatever the server answers.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send("POST", path, None).await?;
        Ok(())
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let url = self.config.url(path);
        tracing::debug!("{method} {url}");
        fetch_text(&url, method, body, self.token.as_deref()).await
    }
}

impl WishlistApi for ApiClient {
    async fn add_to_wishlist(
        &self,
        username: &str,
        product_id: ProductId,
    ) -> Result<MessageResponse, ApiError> {
        self.patch_json(&wishlist_item_path(username, product_id), &product_id)
            .await
    }
}

/// GET `path` and decode it as `T`.
///
/// Yields `None` until the response arrives. A failed request is logged and
/// also stays `None`; callers render the empty state in both cases. The
/// request is re-issued when `path` changes.
pub fn use_fetch<T>(path: String) -> Resource<Option<T>>
where
    T: DeserializeOwned + 'static,
{
    let auth = use_auth();
    use_resource(use_reactive((&path,), move |(path,)| async move {
        let session = auth.session();
        let client = ApiClient::from_env().with_session(session.as_ref());
        match client.get_json::<T>(&path).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("GET {path} failed: {e}");
                None
            }
        }
    }))
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch_text(
    url: &str,
    method: &str,
    body: Option<String>,
    token: Option<&str>,
) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);
    opts.set_credentials(web_sys::RequestCredentials::Include);

    let has_body = body.is_some();
    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Transport(format!("Failed to create request: {:?}", e)))?;

    let headers = request.headers();
    headers
        .set("Accept", "*/*")
        .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;
    if has_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;
    }
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Transport(format!("Failed to set header: {:?}", e)))?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("No window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(format!("Fetch failed: {:?}", e)))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Transport("Response is not a Response object".into()))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(format!("Failed to get text: {:?}", e)))?,
    )
    .await
    .map_err(|e| ApiError::Transport(format!("Failed to read body: {:?}", e)))?;

    let text_str = text
        .as_string()
        .ok_or_else(|| ApiError::Decode("Response body is not a string".into()))?;

    let status = resp.status();
    if status >= 400 {
        return Err(ApiError::Status {
            status,
            url: url.to_string(),
            body: text_str,
        });
    }

    Ok(text_str)
}

// Non-WASM stub for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch_text(
    _url: &str,
    _method: &str,
    _body: Option<String>,
    _token: Option<&str>,
) -> Result<String, ApiError> {
    Err(ApiError::Unsupported)
}
