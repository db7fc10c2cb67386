//! Feed counters.
//!
//! Malformed messages are dropped silently; these counters keep that
//! behavior observable without changing it.

#![allow(missing_docs)]

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedMetrics {
    /// Messages handed to the router, well-formed or not.
    pub received: u64,
    /// Messages that reached a merge function.
    pub applied: u64,
    /// Messages on a known topic whose body failed to decode.
    pub dropped: u64,
    /// Messages on a topic outside the fixed set.
    pub ignored: u64,
}
