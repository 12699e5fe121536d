//! Swap request types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// What the requester is offering in exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SwapKind {
    /// Redeem with the requester's points balance.
    #[default]
    Points,
    /// Offer an item-for-item swap.
    Swap,
}

/// An unsubmitted swap request, as composed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequestDraft {
    /// Item being requested.
    pub item_id: String,
    /// Message to the item's owner.
    pub message: String,
    /// Points redemption or item swap.
    pub kind: SwapKind,
}

impl SwapRequestDraft {
    /// Creates a points-redemption draft.
    pub fn points(item_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            message: message.into(),
            kind: SwapKind::Points,
        }
    }

    /// Validates the draft and produces the wire body.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSwapRequest`] when the message is
    /// empty or whitespace-only, or the item id is empty.
    pub fn into_body(self) -> DomainResult<SwapRequestBody> {
        if self.item_id.is_empty() {
            return Err(DomainError::InvalidSwapRequest(
                "item id must not be empty".to_string(),
            ));
        }
        let message = self.message.trim().to_string();
        if message.is_empty() {
            return Err(DomainError::InvalidSwapRequest(
                "message must not be empty".to_string(),
            ));
        }
        Ok(SwapRequestBody {
            item_id: self.item_id,
            message,
            kind: self.kind,
        })
    }
}

/// Validated swap request body, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequestBody {
    /// Item being requested.
    pub item_id: String,
    /// Message to the item's owner, trimmed and non-empty.
    pub message: String,
    /// Points redemption or item swap.
    #[serde(rename = "type")]
    pub kind: SwapKind,
}
