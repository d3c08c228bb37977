use gloo_net::http::{Request, RequestBuilder};
use poem_types::Poem;
use serde::Deserialize;
use std::sync::OnceLock;
use web_sys::{FormData, UrlSearchParams};

use crate::error::GalleryError;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (API serves static files)
fn get_api_base() -> String {
    // Get the current hostname from the browser
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    // If running on localhost, point to the API server on port 8000
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        // In production, use same origin
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

/// Server-side list filter; at most one parameter goes out per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemFilter {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl PoemFilter {
    pub fn search(query: &str) -> Self {
        Self {
            search: Some(query.to_string()),
            tag: None,
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self {
            search: None,
            tag: Some(tag.to_string()),
        }
    }

    /// The single query parameter applied to `GET /poems`, if any.
    /// Search wins when both are set; empty strings count as unset.
    pub fn query_param(&self) -> Option<(&'static str, &str)> {
        if let Some(q) = self.search.as_deref().filter(|q| !q.is_empty()) {
            Some(("search", q))
        } else {
            self.tag
                .as_deref()
                .filter(|t| !t.is_empty())
                .map(|t| ("tag", t))
        }
    }
}

/// Body of a successful `POST /admin/login`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Form fields shared by create and update; `tags` keeps the user's
/// comma-separated rendering, the server does the splitting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemInput {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
    pub is_featured: bool,
}

pub async fn fetch_poems(filter: &PoemFilter) -> Result<Vec<Poem>, GalleryError> {
    let url = format!("{}/poems", api_base());

    let mut request = Request::get(&url);
    if let Some((key, value)) = filter.query_param() {
        request = request.query([(key, value)]);
    }

    let response = request
        .send()
        .await
        .map_err(|e| GalleryError::Network(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(GalleryError::Network(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| GalleryError::Network(format!("failed to parse JSON: {e}")))
}

pub async fn fetch_poem(id: &str) -> Result<Poem, GalleryError> {
    let url = format!("{}/poems/{}", api_base(), id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| GalleryError::Network(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(GalleryError::NotFound);
    }

    response
        .json()
        .await
        .map_err(|e| GalleryError::Network(format!("failed to parse JSON: {e}")))
}

/// Exchange credentials for a bearer token. A rejected login and a failed
/// request both come back as [`GalleryError::Auth`].
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, GalleryError> {
    let url = format!("{}/admin/login", api_base());

    let body = UrlSearchParams::new()
        .map_err(|_| GalleryError::Auth("failed to build login form".to_string()))?;
    body.append("username", username);
    body.append("password", password);

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| GalleryError::Auth(format!("request encode failed: {e}")))?
        .send()
        .await
        .map_err(|e| GalleryError::Auth(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(GalleryError::Auth(format!("HTTP {}", response.status())));
    }

    response
        .json()
        .await
        .map_err(|e| GalleryError::Auth(format!("failed to parse JSON: {e}")))
}

pub async fn create_poem(
    token: &str,
    input: &PoemInput,
    cover: Option<&web_sys::File>,
) -> Result<Poem, GalleryError> {
    let url = format!("{}/admin/poems", api_base());
    submit_poem(Request::post(&url), token, input, cover).await
}

pub async fn update_poem(
    token: &str,
    id: &str,
    input: &PoemInput,
    cover: Option<&web_sys::File>,
) -> Result<Poem, GalleryError> {
    let url = format!("{}/admin/poems/{}", api_base(), id);
    submit_poem(Request::put(&url), token, input, cover).await
}

async fn submit_poem(
    request: RequestBuilder,
    token: &str,
    input: &PoemInput,
    cover: Option<&web_sys::File>,
) -> Result<Poem, GalleryError> {
    let form = poem_form_data(input, cover)?;

    let response = request
        .header("Authorization", &format!("Bearer {token}"))
        .body(form)
        .map_err(|e| GalleryError::Save(format!("request encode failed: {e}")))?
        .send()
        .await
        .map_err(|e| GalleryError::Save(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(GalleryError::Save(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| GalleryError::Save(format!("failed to parse JSON: {e}")))
}

fn poem_form_data(
    input: &PoemInput,
    cover: Option<&web_sys::File>,
) -> Result<FormData, GalleryError> {
    let form =
        FormData::new().map_err(|_| GalleryError::Save("failed to build form data".to_string()))?;

    let _ = form.append_with_str("title", &input.title);
    let _ = form.append_with_str("excerpt", &input.excerpt);
    let _ = form.append_with_str("content", &input.content);
    let _ = form.append_with_str("tags", &input.tags);
    let _ = form.append_with_str(
        "isFeatured",
        if input.is_featured { "true" } else { "false" },
    );

    if let Some(file) = cover {
        form.append_with_blob_and_filename("cover", file, &file.name())
            .map_err(|_| GalleryError::Save("failed to attach cover".to_string()))?;
    }

    Ok(form)
}

pub async fn delete_poem(token: &str, id: &str) -> Result<(), GalleryError> {
    let url = format!("{}/admin/poems/{}", api_base(), id);

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|e| GalleryError::Network(format!("request failed: {e}")))?;

    if !response.ok() {
        return Err(GalleryError::Network(format!(
            "HTTP error: {}",
            response.status()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_sends_at_most_one_parameter() {
        assert_eq!(PoemFilter::default().query_param(), None);
        assert_eq!(
            PoemFilter::search("rain").query_param(),
            Some(("search", "rain"))
        );
        assert_eq!(PoemFilter::tag("night").query_param(), Some(("tag", "night")));

        let both = PoemFilter {
            search: Some("rain".to_string()),
            tag: Some("night".to_string()),
        };
        assert_eq!(both.query_param(), Some(("search", "rain")));
    }

    #[test]
    fn empty_filter_values_count_as_unset() {
        assert_eq!(PoemFilter::search("").query_param(), None);
        assert_eq!(PoemFilter::tag("").query_param(), None);
    }

    #[test]
    fn login_response_parses_access_token() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"access_token": "tok-123"}"#).unwrap();
        assert_eq!(body.access_token, "tok-123");
    }
}
