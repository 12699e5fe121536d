//! Use case orchestration.

mod request_swap;
mod view_item;

pub use request_swap::{RequestSwap, SwapOutcome};
pub use view_item::ViewItem;
