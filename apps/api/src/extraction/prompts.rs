// Extraction pipeline LLM prompt templates.
// All prompts for the extraction module are defined here.

pub const ORGANIZE_SYSTEM: &str = "\
You are an assistant that organizes the following text into a structured format \
similar to a resume layout. Use commas to separate items where appropriate, and list \
information in a clear, concise manner with each point or category distinctly separated. \
Maintain the original order of the text without adding introductory messages or additional \
instructions.";

pub const ORGANIZE_PROMPT_TEMPLATE: &str =
    "Organize and categorize the following text: {extracted_text}";
