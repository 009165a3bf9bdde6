//! Error types for the `prim-hash` crate

/// Errors reported by maps and sorted views.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A write was attempted through a read-only sorted view.
    ///
    /// Sorted views never modify their delegate. Mutate the underlying
    /// [`PrimitiveHashMap`](crate::PrimitiveHashMap) instead, after dropping
    /// or detaching the view.
    #[error("read-only view cannot be modified (attempted `{operation}`)")]
    ReadOnly {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// The delegate map no longer has the size the iteration order was
    /// built for.
    ///
    /// Only size changes are detected. Replacing a key by another while
    /// keeping the size constant goes unnoticed.
    #[error(
        "delegate map changed after the iteration order was built: expected {expected} entries, found {actual}"
    )]
    StaleView {
        /// Number of entries the iteration order covers.
        expected: usize,
        /// Number of entries the delegate currently holds.
        actual: usize,
    },

    /// The requested load factor is outside `[0.01, 0.99]`.
    #[error("load factor {0} is outside the supported range [0.01, 0.99]")]
    LoadFactorOutOfRange(f64),
}
