//! Recommendation rules: pure mapping from pain rating to tiered advice.

mod quotes;
mod rules;

pub use quotes::{pick_quote, MOTIVATIONAL_QUOTES};
pub use rules::{classify, AccentColor, RecommendationResult, SeverityTier};
