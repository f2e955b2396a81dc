//! Round response DTOs

use serde::Serialize;

use crate::services::round_service::RoundReceipt;

/// Response for any round submission
#[derive(Debug, Serialize)]
pub struct RoundSubmissionResponse {
    pub message: String,
    #[serde(flatten)]
    pub receipt: RoundReceipt,
}

impl From<RoundReceipt> for RoundSubmissionResponse {
    fn from(receipt: RoundReceipt) -> Self {
        Self {
            message: "Submitted successfully".to_string(),
            receipt,
        }
    }
}
