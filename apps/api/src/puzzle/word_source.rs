//! Word Source — supplies candidate words for a topic.
//!
//! The generator only depends on the `WordSource` trait. `LlmWordSource` is the
//! production backend; tests plug in fixed lists.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm_client::prompts::render;
use crate::llm_client::{LlmClient, LlmError};
use crate::puzzle::prompts::{WORD_LIST_PROMPT_TEMPLATE, WORD_LIST_SYSTEM};

/// Attempts per request before the LLM source gives up and returns no words.
const MAX_ATTEMPTS: u32 = 3;

/// Carried in `AppState` as `Arc<dyn WordSource>`.
#[async_trait]
pub trait WordSource: Send + Sync {
    /// Returns up to `count` candidate words. An empty list is a valid answer.
    async fn fetch_words(&self, topic: &str, count: usize) -> Result<Vec<String>, LlmError>;
}

/// Asks the hosted model for a JSON array of exactly `count` words.
pub struct LlmWordSource {
    llm: LlmClient,
    max_word_len: usize,
}

impl LlmWordSource {
    pub fn new(llm: LlmClient, max_word_len: usize) -> Self {
        Self { llm, max_word_len }
    }
}

#[async_trait]
impl WordSource for LlmWordSource {
    async fn fetch_words(&self, topic: &str, count: usize) -> Result<Vec<String>, LlmError> {
        let count_str = count.to_string();
        let max_len = self.max_word_len.to_string();
        let prompt = render(
            WORD_LIST_PROMPT_TEMPLATE,
            &[
                ("count", count_str.as_str()),
                ("max_len", max_len.as_str()),
                ("topic", topic),
            ],
        );

        for attempt in 1..=MAX_ATTEMPTS {
            match self.llm.call_json::<Vec<String>>(&prompt, WORD_LIST_SYSTEM).await {
                Ok(words) if words.len() == count => {
                    debug!("Word source returned {} words for '{topic}'", words.len());
                    return Ok(words);
                }
                Ok(words) => warn!(
                    "Attempt {attempt}: expected {count} words for '{topic}', got {}",
                    words.len()
                ),
                Err(e) if is_malformed_reply(&e) => {
                    warn!("Attempt {attempt}: unusable word list for '{topic}': {e}")
                }
                Err(e) => return Err(e),
            }
        }

        warn!("No usable word list for '{topic}' after {MAX_ATTEMPTS} attempts");
        Ok(Vec::new())
    }
}

/// Replies that reached us but could not be used are retried; transport and API failures are not.
fn is_malformed_reply(error: &LlmError) -> bool {
    matches!(error, LlmError::Parse(_) | LlmError::EmptyContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_reply;
    use crate::llm_client::stub::{reply, status, ChatStub};

    const THREE_WORDS: &str = r#"["CAT", "DOG", "SUN"]"#;

    #[tokio::test]
    async fn test_exact_count_is_returned_on_first_attempt() {
        let server = ChatStub::start(vec![reply(THREE_WORDS)]).await;
        let source = LlmWordSource::new(server.client(), 10);

        let words = source.fetch_words("animals", 3).await.unwrap();
        assert_eq!(words, vec!["CAT", "DOG", "SUN"]);
        assert_eq!(server.hits(), 1);
    }

    #[tokio::test]
    async fn test_wrong_count_is_retried() {
        let server = ChatStub::start(vec![reply(r#"["CAT", "DOG"]"#), reply(THREE_WORDS)]).await;
        let source = LlmWordSource::new(server.client(), 10);

        let words = source.fetch_words("animals", 3).await.unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(server.hits(), 2);
    }

    #[tokio::test]
    async fn test_unparseable_fenced_reply_is_retried() {
        let server = ChatStub::start(vec![
            reply("```json\nHere you go: CAT, DOG, SUN\n```"),
            reply(THREE_WORDS),
        ])
        .await;
        let source = LlmWordSource::new(server.client(), 10);

        let words = source.fetch_words("animals", 3).await.unwrap();
        assert_eq!(words, vec!["CAT", "DOG", "SUN"]);
        assert_eq!(server.hits(), 2);
    }

    #[tokio::test]
    async fn test_gives_up_with_empty_list_after_three_attempts() {
        let server = ChatStub::start(vec![reply(r#"["CAT"]"#)]).await;
        let source = LlmWordSource::new(server.client(), 10);

        let words = source.fetch_words("animals", 3).await.unwrap();
        assert!(words.is_empty());
        assert_eq!(server.hits(), MAX_ATTEMPTS as usize);
    }

    #[tokio::test]
    async fn test_unauthorized_is_returned_without_retry() {
        let server = ChatStub::start(vec![status(401, "Invalid API Key"), reply(THREE_WORDS)]).await;
        let source = LlmWordSource::new(server.client(), 10);

        let err = source.fetch_words("animals", 3).await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 401, .. }));
        assert_eq!(server.hits(), 1);
    }

    #[test]
    fn test_parse_and_empty_errors_are_retried() {
        let parse = parse_json_reply::<Vec<String>>("not json").unwrap_err();
        assert!(is_malformed_reply(&parse));
        assert!(is_malformed_reply(&LlmError::EmptyContent));
    }

    #[test]
    fn test_api_errors_are_not_retried() {
        let err = LlmError::Api {
            status: 401,
            message: "invalid api key".to_string(),
        };
        assert!(!is_malformed_reply(&err));
        assert!(!is_malformed_reply(&LlmError::RateLimited { retries: 3 }));
    }

    #[test]
    fn test_non_string_array_is_malformed() {
        let err = parse_json_reply::<Vec<String>>("[\"CAT\", 3]").unwrap_err();
        assert!(is_malformed_reply(&err));
    }

    #[test]
    fn test_prompt_mentions_count_topic_and_length() {
        let prompt = render(
            WORD_LIST_PROMPT_TEMPLATE,
            &[("count", "10"), ("topic", "ocean"), ("max_len", "10")],
        );
        assert!(prompt.contains("exactly 10 short words"));
        assert!(prompt.contains("'ocean'"));
        assert!(prompt.contains("at most 10 letters"));
        assert!(!prompt.contains("{count}"));
    }
}
