use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use shared_types::{Note, NoteDraft, NoteId};

use crate::config::client_config;
use crate::error::NotesError;

/// Operations on the remote `notes` collection resource.
///
/// Implementations never touch the local cache; callers reload after a
/// successful mutation.
#[async_trait(?Send)]
pub trait NotesApi {
    /// `GET /api/notes`
    async fn list(&self) -> Result<Vec<Note>, NotesError>;

    /// `POST /api/notes`
    async fn create(&self, draft: &NoteDraft) -> Result<(), NotesError>;

    /// `PUT /api/notes/{id}`
    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<(), NotesError>;

    /// `DELETE /api/notes/{id}`
    async fn delete(&self, id: &NoteId) -> Result<(), NotesError>;
}

/// Browser HTTP client for the notes REST API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpNotesApi {
    base: String,
}

impl HttpNotesApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client pointed at the configured API base
    pub fn from_config() -> Self {
        Self::new(client_config().api_base.clone())
    }

    pub fn collection_url(&self) -> String {
        format!("{}/api/notes", self.base)
    }

    pub fn note_url(&self, id: &NoteId) -> String {
        format!("{}/api/notes/{}", self.base, id)
    }
}

#[async_trait(?Send)]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, NotesError> {
        let response = Request::get(&self.collection_url())
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(describe_http_error(response).await);
        }

        response
            .json::<Vec<Note>>()
            .await
            .map_err(|e| NotesError::InvalidResponse(e.to_string()))
    }

    async fn create(&self, draft: &NoteDraft) -> Result<(), NotesError> {
        let response = Request::post(&self.collection_url())
            .json(draft)
            .map_err(encode_error)?
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        ensure_success(response).await
    }

    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<(), NotesError> {
        let response = Request::put(&self.note_url(id))
            .json(draft)
            .map_err(encode_error)?
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        ensure_success(response).await
    }

    async fn delete(&self, id: &NoteId) -> Result<(), NotesError> {
        let response = Request::delete(&self.note_url(id))
            .send()
            .await
            .map_err(|e| NotesError::Network(e.to_string()))?;

        ensure_success(response).await
    }
}

fn encode_error(e: gloo_net::Error) -> NotesError {
    NotesError::Encode(e.to_string())
}

async fn ensure_success(response: Response) -> Result<(), NotesError> {
    if response.ok() {
        Ok(())
    } else {
        Err(describe_http_error(response).await)
    }
}

async fn describe_http_error(response: Response) -> NotesError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    NotesError::Request {
        status,
        detail: error_detail(&body),
    }
}

/// Pull a human-readable reason out of an error body.
/// JSON `error`/`message` fields win; other non-blank bodies are used whole.
pub fn error_detail(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return Some(error.to_string());
        }
        if let Some(message) = json.get("message").and_then(|v| v.as_str()) {
            return Some(message.to_string());
        }
    }

    Some(body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_collection_resource() {
        let api = HttpNotesApi::new("http://localhost:5000");
        assert_eq!(api.collection_url(), "http://localhost:5000/api/notes");
        assert_eq!(
            api.note_url(&NoteId::from(12)),
            "http://localhost:5000/api/notes/12"
        );
    }

    #[test]
    fn same_origin_urls_are_relative() {
        let api = HttpNotesApi::new("");
        assert_eq!(api.collection_url(), "/api/notes");
        assert_eq!(api.note_url(&NoteId::from("abc")), "/api/notes/abc");
    }

    #[test]
    fn body_encoding_failure_is_not_a_network_error() {
        let err = encode_error(gloo_net::Error::GlooError("bad body".to_string()));
        assert_eq!(err, NotesError::Encode("bad body".to_string()));
    }

    #[test]
    fn error_detail_prefers_json_fields() {
        assert_eq!(
            error_detail(r#"{"error": "note not found"}"#).as_deref(),
            Some("note not found")
        );
        assert_eq!(
            error_detail(r#"{"message": "gone"}"#).as_deref(),
            Some("gone")
        );
        assert_eq!(
            error_detail("Internal Server Error").as_deref(),
            Some("Internal Server Error")
        );
        assert_eq!(error_detail("   "), None);
    }
}
