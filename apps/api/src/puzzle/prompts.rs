// Prompt constants for the word-search word source.

/// System prompt for word-list generation. Enforces a bare JSON array.
pub const WORD_LIST_SYSTEM: &str = "You are a vocabulary assistant for educational word-search puzzles. \
    You MUST respond with a valid JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Word-list prompt template. Replace `{count}` and `{topic}` before sending.
pub const WORD_LIST_PROMPT_TEMPLATE: &str = r#"Return exactly {count} short words related to the topic '{topic}'.

Rules:
- Each word is a single word with letters only: no spaces, digits, hyphens or punctuation
- Each word has at most {max_len} letters
- Do not repeat words

Return a JSON array in exactly this format and nothing else:
["word1", "word2", "word3", ...]"#;
