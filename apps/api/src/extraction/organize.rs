//! Organizes raw extracted text into resume-shaped text via the LLM.

use tracing::{debug, error};

use crate::errors::AppError;
use crate::extraction::prompts::{ORGANIZE_PROMPT_TEMPLATE, ORGANIZE_SYSTEM};
use crate::llm_client::LlmClient;

/// Sends extracted PDF text to the organizer model and returns the
/// structured text.
///
/// Fails with `OrganizationFailed` when the call errors or the model
/// returns no content. The call is a single attempt, no retries.
pub async fn organize_text(llm: &LlmClient, extracted_text: &str) -> Result<String, AppError> {
    let prompt = ORGANIZE_PROMPT_TEMPLATE.replace("{extracted_text}", extracted_text);

    let organized = llm.call_text(&prompt, ORGANIZE_SYSTEM).await.map_err(|e| {
        error!("Failed to organize text with OpenAI: {e}");
        AppError::OrganizationFailed
    })?;

    debug!("Organized text from OpenAI: {organized}");
    Ok(organized)
}
