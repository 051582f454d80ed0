//! Synchronization primitives with loom support for concurrency testing.
//!
//! The graph is written against the `parking_lot` lock API (guards returned
//! directly, no poisoning). Under `cfg(loom)` the same API is provided by a
//! thin wrapper over loom's mocked `RwLock`, so the production locking code
//! is the code loom explores.
//!
//! # Testing with Loom
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo test --release --features loom --test loom_tests
//! ```

// ============================================================================
// Arc
// ============================================================================

#[cfg(loom)]
pub use loom::sync::Arc;

#[cfg(not(loom))]
pub use std::sync::Arc;

// ============================================================================
// RwLock
// ============================================================================

#[cfg(not(loom))]
pub use parking_lot::RwLock;

#[cfg(loom)]
pub use self::loom_rwlock::RwLock;

#[cfg(loom)]
mod loom_rwlock {
    use std::fmt;
    use std::sync::PoisonError;

    use loom::sync::{RwLockReadGuard, RwLockWriteGuard};

    /// `parking_lot`-shaped facade over `loom::sync::RwLock`.
    pub struct RwLock<T> {
        inner: loom::sync::RwLock<T>,
    }

    impl<T> RwLock<T> {
        /// Creates a new lock.
        pub fn new(value: T) -> Self {
            Self {
                inner: loom::sync::RwLock::new(value),
            }
        }

        /// Acquires shared access, ignoring poisoning like `parking_lot`.
        pub fn read(&self) -> RwLockReadGuard<'_, T> {
            self.inner.read().unwrap_or_else(PoisonError::into_inner)
        }

        /// Acquires exclusive access, ignoring poisoning like `parking_lot`.
        pub fn write(&self) -> RwLockWriteGuard<'_, T> {
            self.inner.write().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<T: Default> Default for RwLock<T> {
        fn default() -> Self {
            Self::new(T::default())
        }
    }

    impl<T> fmt::Debug for RwLock<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("RwLock").finish_non_exhaustive()
        }
    }
}

// ============================================================================
// Thread spawning (for loom tests)
// ============================================================================

#[cfg(loom)]
pub use loom::thread;

#[cfg(not(loom))]
pub use std::thread;
