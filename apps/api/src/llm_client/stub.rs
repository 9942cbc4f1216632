//! Local chat-completions server for tests. Serves scripted replies in order,
//! repeating the last one once the script runs out, and counts requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use super::LlmClient;

#[derive(Debug, Clone)]
pub struct ScriptedReply {
    status: StatusCode,
    body: Value,
}

/// A 200 reply whose first choice carries `content`.
pub fn reply(content: &str) -> ScriptedReply {
    ScriptedReply {
        status: StatusCode::OK,
        body: json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }),
    }
}

/// An error reply in the provider's `{error:{message}}` shape.
pub fn status(code: u16, message: &str) -> ScriptedReply {
    ScriptedReply {
        status: StatusCode::from_u16(code).expect("valid status code"),
        body: json!({"error": {"message": message}}),
    }
}

struct Script {
    replies: Vec<ScriptedReply>,
    hits: AtomicUsize,
}

pub struct ChatStub {
    url: String,
    script: Arc<Script>,
}

impl ChatStub {
    pub async fn start(replies: Vec<ScriptedReply>) -> Self {
        assert!(!replies.is_empty(), "stub needs at least one reply");
        let script = Arc::new(Script {
            replies,
            hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/v1/chat/completions", post(serve_reply))
            .with_state(script.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self {
            url: format!("http://{addr}/v1/chat/completions"),
            script,
        }
    }

    pub fn client(&self) -> LlmClient {
        LlmClient::new("test-key".to_string(), self.url.clone()).expect("llm client")
    }

    pub fn hits(&self) -> usize {
        self.script.hits.load(Ordering::SeqCst)
    }
}

async fn serve_reply(State(script): State<Arc<Script>>) -> (StatusCode, Json<Value>) {
    let hit = script.hits.fetch_add(1, Ordering::SeqCst);
    let idx = hit.min(script.replies.len() - 1);
    let ScriptedReply { status, body } = script.replies[idx].clone();
    (status, Json(body))
}
