//! Removal confirmation state.

use serde::Serialize;

use super::id::ProductId;

/// Whether a line item is waiting for the user to confirm its removal.
///
/// The pending item is identified by product id so that other cart
/// mutations cannot retarget the removal at a different line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RemovalState {
    #[default]
    Idle,
    AwaitingConfirmation { product_id: ProductId, name: String },
}

impl RemovalState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::AwaitingConfirmation { .. })
    }

    /// Product id awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_id(&self) -> Option<&ProductId> {
        match self {
            Self::Idle => None,
            Self::AwaitingConfirmation { product_id, .. } => Some(product_id),
        }
    }

    /// True if `id` is the item awaiting confirmation.
    #[must_use]
    pub fn is_pending_for(&self, id: &ProductId) -> bool {
        self.pending_id() == Some(id)
    }
}
