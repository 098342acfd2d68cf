//! Mock Completion Provider for testing.
//!
//! Provides a scripted implementation of the CompletionProvider port,
//! allowing the `/ai` flow to be tested without calling a real endpoint.
//!
//! # Features
//!
//! - Pre-configured outcomes, consumed in order
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockCompletionProvider::new()
//!     .with_answer("**hi**")
//!     .with_api_error("rate limited");
//!
//! let outcome = provider.complete(request).await;
//! assert_eq!(outcome, CompletionOutcome::answer("**hi**"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::CompletionOutcome;
use crate::ports::{CompletionProvider, CompletionRequest, ProviderInfo};

/// Mock completion provider for testing.
#[derive(Debug, Clone)]
pub struct MockCompletionProvider {
    /// Pre-configured outcomes (consumed in order).
    outcomes: Arc<Mutex<VecDeque<CompletionOutcome>>>,
    /// Provider info to return.
    info: ProviderInfo,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionProvider {
    /// Creates a new mock provider with no scripted outcomes.
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues an arbitrary outcome.
    pub fn with_outcome(self, outcome: CompletionOutcome) -> Self {
        self.lock_outcomes().push_back(outcome);
        self
    }

    /// Queues a successful answer.
    pub fn with_answer(self, content: impl Into<String>) -> Self {
        self.with_outcome(CompletionOutcome::answer(content))
    }

    /// Queues an error reported by the endpoint.
    pub fn with_api_error(self, message: impl Into<String>) -> Self {
        self.with_outcome(CompletionOutcome::api_error(message))
    }

    /// Queues a transport failure.
    pub fn with_transport_failure(self, reason: impl Into<String>) -> Self {
        self.with_outcome(CompletionOutcome::transport_failure(reason))
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns all recorded calls.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.lock_calls().clone()
    }

    fn lock_outcomes(&self) -> std::sync::MutexGuard<'_, VecDeque<CompletionOutcome>> {
        self.outcomes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Gets the next outcome or a default answer.
    fn next_outcome(&self) -> CompletionOutcome {
        self.lock_outcomes()
            .pop_front()
            .unwrap_or_else(|| CompletionOutcome::answer("Mock response"))
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> CompletionOutcome {
        self.lock_calls().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_outcome()
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
