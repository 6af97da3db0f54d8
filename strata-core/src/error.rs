//! Error types for layer operations

/// Which argument of a call was outside the configured bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coordinate {
    /// Layer index not below the layer count
    Layer,
    /// Row outside `1..=ROWS`
    Row,
    /// Column outside `1..=COLS` (or zero for text writes)
    Column,
}

/// Errors returned by [`LayerStore`](crate::LayerStore) operations
///
/// A failed call has not modified any layer and has not woken the
/// compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// A layer, row or column argument is out of range
    OutOfRange(Coordinate),
}
