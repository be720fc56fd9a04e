//! Request generations.
//!
//! Record and leave fetches resolve asynchronously in the UI. When the user
//! moves from date D1 to D2 before the D1 fetch resolves, the D1 response must
//! not overwrite the D2 view. Callers take a fresh [`Generation`] per request,
//! carry it alongside the result as a [`Stamped`] value, and let
//! [`GenerationCounter::accept`] drop anything that is no longer the latest.

use serde::Serialize;
use tracing::debug;

/// Identifies one request. Later requests have larger generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A value tagged with the generation it was requested under.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamped<T> {
    pub generation: Generation,
    pub value: T,
}

impl<T> Stamped<T> {
    pub fn new(generation: Generation, value: T) -> Self {
        Self { generation, value }
    }
}

/// Hands out generations; the most recent one wins.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: u64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, making every earlier generation stale.
    pub fn next(&mut self) -> Generation {
        self.current += 1;
        Generation(self.current)
    }

    pub fn current(&self) -> Generation {
        Generation(self.current)
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }

    /// Unwrap `stamped` if it belongs to the latest request.
    pub fn accept<T>(&self, stamped: Stamped<T>) -> Option<T> {
        if self.is_current(stamped.generation) {
            Some(stamped.value)
        } else {
            debug!(
                stale = stamped.generation.0,
                current = self.current,
                "discarding stale response"
            );
            None
        }
    }
}
