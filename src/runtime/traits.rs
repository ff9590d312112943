//! Trait abstractions for response resolution
//!
//! The responder seam enables testing the executor without the simulated
//! thinking delay.

use crate::classifier;
use crate::responses::{self, ResponsePayload};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use thiserror::Error;

/// Error from response resolution.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("response generation failed: {0}")]
    Generation(String),
}

/// Resolves a user prompt to a response payload.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<ResponsePayload, ResponderError>;
}

/// Production responder: waits a randomized thinking delay, then classifies
/// the prompt and resolves it from the response repository.
pub struct CannedResponder {
    latency_min: Duration,
    latency_max: Duration,
}

impl CannedResponder {
    pub fn new() -> Self {
        Self {
            latency_min: Duration::from_millis(2000),
            latency_max: Duration::from_millis(3500),
        }
    }

    /// Override the latency window. `min` must not exceed `max`.
    pub fn with_latency(min: Duration, max: Duration) -> Self {
        Self {
            latency_min: min,
            latency_max: max,
        }
    }
}

impl Default for CannedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for CannedResponder {
    async fn respond(&self, prompt: &str) -> Result<ResponsePayload, ResponderError> {
        // thread_rng is not Send; sample before the await point
        let delay = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.latency_min..=self.latency_max)
        };
        tokio::time::sleep(delay).await;

        let topic = classifier::classify(prompt);
        Ok(responses::lookup(topic, prompt))
    }
}
