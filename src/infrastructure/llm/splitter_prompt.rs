pub const SPLITTER_SYSTEM_PROMPT: &str = "You are a text separator. Your ONLY job is to split the input text into its original prompt and response components.

CRITICAL RULES:
- DO NOT summarize or modify ANY text
- Return the EXACT original text split into two parts
- Make NO changes to the content
- Preserve ALL formatting and whitespace

Return ONLY a JSON object with these fields:
- title: brief descriptive title (max 6 words)
- prompt: the EXACT, COMPLETE first part of the conversation
- output: the EXACT, COMPLETE response/answer part";

pub fn build_split_request(text: &str) -> String {
    format!(
        "Split this text into its original parts with NO modifications: {}",
        text
    )
}
