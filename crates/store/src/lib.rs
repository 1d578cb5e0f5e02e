#![warn(missing_docs)]
//! Fixed-capacity boxes for tagged, weighted items.
//!
//! Two interchangeable backings implement the same contract: [`SlotArray`]
//! keeps items in one contiguous buffer and compacts on removal, while
//! [`SlotChain`] keeps one owned node per item and splices on removal. In
//! both, an item's weight (not a count of one) decides whether it fits and
//! how much space a removal reclaims. [`ChessBox`] pairs two boxes and
//! routes pieces by color.

pub mod chess_box;
pub mod slot_array;
pub mod slot_chain;

pub use chess_box::ChessBox;
pub use slot_array::SlotArray;
pub use slot_chain::SlotChain;

/// Capacity used when a box is constructed with zero capacity.
pub const DEFAULT_CAPACITY: usize = 64;

/// Contract for items stored in a box.
///
/// `Default` supplies the empty filler value: weight zero, with a tag
/// distinguishable from any real item.
pub trait SlotItem: Clone + Default {
    /// Tag used for lookup, removal, and counting. Compared exactly,
    /// case-sensitively.
    fn tag(&self) -> &str;

    /// Number of capacity units the item occupies.
    fn weight(&self) -> usize;
}

/// Clamp a requested capacity to the default-64 rule.
fn effective_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}
