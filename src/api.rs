//! REST Client
//!
//! Thin bindings to the todo service. One function per endpoint; any
//! transport or non-success outcome comes back as a distinguishable
//! `ApiError`. No retries, no caching, no state.

use reqwest::Client;

use crate::models::{Todo, TodoDraft, TodoPage, TodoPatch, UpdatePayload};

/// Service base URL
const API_BASE: &str = "http://localhost:8080";

// ========================
// Errors
// ========================

/// Client-side error taxonomy
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request could not be sent, or no usable response came back
    Transport(String),
    /// The server answered with a non-success status
    Server { status: u16, message: String },
    /// Rejected locally before any request was made
    Validation(String),
}

impl ApiError {
    fn transport(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Server { status, message } => write!(f, "Server error {}: {}", status, message),
            ApiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Reject non-success statuses before decoding the body
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_string(),
        })
    }
}

/// Query for one page of the scroll feed
fn page_url(cursor: u64, limit: u32, sort: &str, order: &str) -> String {
    format!(
        "{}/todos/scroll?nextCursor={}&limit={}&sort={}&order={}",
        API_BASE, cursor, limit, sort, order
    )
}

// ========================
// Endpoints
// ========================

/// Fetch one page of todos
pub async fn fetch_page(cursor: u64, limit: u32, sort: &str, order: &str) -> Result<TodoPage, ApiError> {
    let response = Client::new()
        .get(page_url(cursor, limit, sort, order))
        .send()
        .await
        .map_err(ApiError::transport)?;
    check_status(response)?
        .json::<TodoPage>()
        .await
        .map_err(ApiError::transport)
}

/// Create a todo; the server assigns the durable id
pub async fn create_todo(draft: &TodoDraft) -> Result<Todo, ApiError> {
    let response = Client::new()
        .post(format!("{}/todos", API_BASE))
        .json(draft)
        .send()
        .await
        .map_err(ApiError::transport)?;
    check_status(response)?
        .json::<Todo>()
        .await
        .map_err(ApiError::transport)
}

/// Update a todo; returns the fields the server changed
pub async fn update_todo(id: &str, payload: &UpdatePayload) -> Result<TodoPatch, ApiError> {
    let response = Client::new()
        .put(format!("{}/todos/{}", API_BASE, id))
        .json(payload)
        .send()
        .await
        .map_err(ApiError::transport)?;
    check_status(response)?
        .json::<TodoPatch>()
        .await
        .map_err(ApiError::transport)
}

/// Delete a todo; the acknowledgement body is ignored
pub async fn delete_todo(id: &str) -> Result<(), ApiError> {
    let response = Client::new()
        .delete(format!("{}/todos/{}", API_BASE, id))
        .send()
        .await
        .map_err(ApiError::transport)?;
    check_status(response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_carries_cursor_and_sort() {
        assert_eq!(
            page_url(20, 20, "title", "asc"),
            "http://localhost:8080/todos/scroll?nextCursor=20&limit=20&sort=title&order=asc"
        );
    }

    #[test]
    fn error_variants_render_distinguishably() {
        let transport = ApiError::Transport("connection refused".to_string());
        let server = ApiError::Server { status: 500, message: "Internal Server Error".to_string() };
        let validation = ApiError::Validation("title must not be empty".to_string());
        assert_eq!(transport.to_string(), "Request failed: connection refused");
        assert_eq!(server.to_string(), "Server error 500: Internal Server Error");
        assert_eq!(validation.to_string(), "Invalid input: title must not be empty");
    }
}
