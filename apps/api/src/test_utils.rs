//! Shared fixtures for handler and pipeline tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::user::UserRecord;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{UpdateOutcome, UserStore};

/// Builds a test server around the real router, with the LLM client
/// pointed at `llm_api_url` (normally a wiremock endpoint).
pub fn test_server(store: Arc<dyn UserStore>, llm_api_url: String) -> TestServer {
    let state = AppState {
        store,
        llm: LlmClient::with_api_url("test-key".to_string(), llm_api_url),
    };
    TestServer::new(build_router(state)).expect("failed to build test server")
}

/// Chat-completion response envelope with the given assistant content.
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 0,
        "model": crate::llm_client::MODEL,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 34, "total_tokens": 46 }
    })
}

/// Mounts an organizer that answers every chat-completion call with
/// `content`.
pub async fn mount_organizer(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(content)))
        .mount(server)
        .await;
}

/// In-memory `UserStore` mirroring the document store's update report:
/// a write of the value already present counts as matched but unmodified.
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_user(user_id: &str) -> Self {
        let store = Self::new();
        store.users.lock().unwrap().insert(
            user_id.to_string(),
            UserRecord {
                user_id: user_id.to_string(),
                resume: None,
            },
        );
        store
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user(&self, user_id: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn update_resume(&self, user_id: &str, resume: &str) -> Result<UpdateOutcome, AppError> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(user_id) {
            None => Ok(UpdateOutcome::NoMatch),
            Some(user) if user.resume.as_deref() == Some(resume) => Ok(UpdateOutcome::Unmodified),
            Some(user) => {
                user.resume = Some(resume.to_string());
                Ok(UpdateOutcome::Applied)
            }
        }
    }
}

/// Builds a minimal single-page PDF that draws `text` in Helvetica.
/// Offsets in the xref table are computed, so the document is well-formed
/// enough for a real extractor.
pub fn minimal_pdf(text: &str) -> Vec<u8> {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)");
    let content = format!("BT /F1 12 Tf 72 720 Td ({escaped}) Tj ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        pdf.push_str(&format!("{offset:010} 00000 n \n"));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
        objects.len() + 1
    ));

    pdf.into_bytes()
}
