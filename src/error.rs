use std::fmt;

/// Infrastructure failure inside a store.
///
/// The in-process stores can only fail if a lock was poisoned by a
/// panicking writer; the payload names the operation that observed it.
/// Business outcomes (missing items, insufficient stock, bad transitions)
/// are typed results on the individual store operations, never this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}
