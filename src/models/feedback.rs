use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of `rate_delivery`. A rejected rating is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RatingOutcome {
    Accepted { rating: u8 },
    Rejected { rating: i32 },
}

impl RatingOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RatingOutcome::Accepted { .. })
    }

    /// Customer-facing acknowledgement
    pub fn message(&self) -> String {
        match self {
            RatingOutcome::Accepted { rating } => format!(
                "Thank you for your feedback! You rated our delivery {} stars.",
                rating
            ),
            RatingOutcome::Rejected { .. } => {
                "Invalid rating. Please provide a rating between 1 and 5 stars.".to_string()
            }
        }
    }
}

impl fmt::Display for RatingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
