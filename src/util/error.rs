//! Error types shared by every collection in the crate.

use derive_more::{Display, Error, From, IsVariant};

/// Returned when an index lies outside the range a collection accepts for an operation. For
/// insertion that range is `0..=len`, for access and removal it is `0..len`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

/// Returned when an operation needs at least one element but the collection has none.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection is empty!")]
pub struct EmptyCollection;

/// Returned when a fixed-capacity collection can't accept another element.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Collection is full at capacity {cap}!")]
pub struct CollectionFull {
    /// The capacity of the full collection.
    pub cap: usize,
}

/// Returned when a fixed-capacity collection is constructed without any room for elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Unable to create fixed-capacity collection with capacity 0!")]
pub struct ZeroCapacity;

/// The length or capacity of a collection would exceed `usize::MAX`.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// Any of the precondition failures a linear collection can report, for callers that mix
/// operations on several collections behind a single `?`.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    #[allow(missing_docs)]
    IndexOutOfBounds(IndexOutOfBounds),
    #[allow(missing_docs)]
    EmptyCollection(EmptyCollection),
    #[allow(missing_docs)]
    CollectionFull(CollectionFull),
    #[allow(missing_docs)]
    ZeroCapacity(ZeroCapacity),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop_twice(len: usize) -> Result<usize, CollectionError> {
        if len < 2 {
            return Err(EmptyCollection.into());
        }
        Ok(len - 2)
    }

    #[test]
    fn test_collection_error_conversion() {
        assert_eq!(pop_twice(3), Ok(1));
        assert!(pop_twice(1).is_err_and(|e| e.is_empty_collection()));

        let err = CollectionError::from(IndexOutOfBounds { index: 4, len: 2 });
        assert!(err.is_index_out_of_bounds());
        assert_eq!(err.to_string(), "Index 4 out of bounds for collection with 2 elements!");
    }
}
