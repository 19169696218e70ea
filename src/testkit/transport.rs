//! Mock [`Transport`] for testing.
//!
//! [`ScriptedTransport`] records every request it receives and answers from a
//! queue of scripted replies. When the queue is exhausted it answers with the
//! default body (JSON `null` unless configured).

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::port::{DaemonRequest, Transport};

enum Outcome {
    Body(Value),
    Failure(String),
    Status(u16, String),
}

struct Reply {
    delay: Duration,
    outcome: Outcome,
}

/// A transport with scripted replies and a request log.
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Reply>>,
    default_body: Value,
    requests: Mutex<Vec<DaemonRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            default_body: Value::Null,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Body returned once the scripted queue is empty.
    pub fn with_default(mut self, body: Value) -> Self {
        self.default_body = body;
        self
    }

    pub fn with_reply(self, body: Value) -> Self {
        self.push(Duration::ZERO, Outcome::Body(body))
    }

    /// Reply with `body` after `delay` (tokio time).
    pub fn with_delayed_reply(self, body: Value, delay: Duration) -> Self {
        self.push(delay, Outcome::Body(body))
    }

    /// Fail with a connection error.
    pub fn with_failure(self, message: &str) -> Self {
        self.push(Duration::ZERO, Outcome::Failure(message.to_string()))
    }

    /// Fail with an HTTP status.
    pub fn with_status(self, status: u16, body: &str) -> Self {
        self.push(Duration::ZERO, Outcome::Status(status, body.to_string()))
    }

    fn push(self, delay: Duration, outcome: Outcome) -> Self {
        self.replies.lock().push_back(Reply { delay, outcome });
        self
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<DaemonRequest> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn last_request(&self) -> Option<DaemonRequest> {
        self.requests.lock().last().cloned()
    }
}

impl Default for ScriptedTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: DaemonRequest) -> Result<Value> {
        self.requests.lock().push(request);
        let reply = self.replies.lock().pop_front();

        let Some(reply) = reply else {
            return Ok(self.default_body.clone());
        };
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        match reply.outcome {
            Outcome::Body(body) => Ok(body),
            Outcome::Failure(message) => Err(Error::Connection(message)),
            Outcome::Status(status, body) => Err(Error::Status { status, body }),
        }
    }
}
