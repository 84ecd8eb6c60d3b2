// Game-over flavor text: the port, the local fallback source and the failure policy.

use async_trait::async_trait;
use tracing::warn;

/// Shown when the text source fails outright.
pub const FALLBACK_MESSAGE: &str = "Great effort! Try again?";

#[derive(Debug)]
pub enum FlavorTextError {
    /// Transport failure or timeout.
    Unavailable,
    /// Upstream answered with a non-success status.
    Rejected(u16),
    /// Upstream answered but the body was not what we expected.
    Malformed,
}

// Port for anything that can write a game-over line for a final score.
#[async_trait]
pub trait FlavorTextSource: Send + Sync {
    async fn compose(&self, score: u32) -> Result<String, FlavorTextError>;
}

/// Local source used when no text-generation service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedFlavorText;

#[async_trait]
impl FlavorTextSource for CannedFlavorText {
    async fn compose(&self, score: u32) -> Result<String, FlavorTextError> {
        if score > 50 {
            Ok(format!("Amazing score: {score}! You're a star!"))
        } else {
            Ok(format!("Good try! Score: {score}. Keep practicing!"))
        }
    }
}

/// Asks `source` once and always yields something displayable. Never retries.
pub async fn game_over_message(source: &dyn FlavorTextSource, score: u32) -> String {
    match source.compose(score).await {
        Ok(text) => {
            let text = text.trim();
            if text.is_empty() {
                format!("Score: {score}. The cosmos awaits your return!")
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            warn!(error = ?e, score, "flavor text unavailable; using fallback");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
