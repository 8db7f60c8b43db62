// Resume extraction pipeline: multipart upload, PDF text extraction,
// LLM organization, resume persistence.
// All LLM calls go through llm_client — no direct OpenAI calls here.

pub mod handlers;
pub mod organize;
pub mod pdf;
pub mod prompts;
