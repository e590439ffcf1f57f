//! Process-wide slideshow instance numbering.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out unique, strictly increasing slideshow instance numbers.
///
/// The first number issued is 1. The counter is never reset while the owner
/// lives; share one counter (behind an `Arc`) per page-render session.
#[derive(Debug, Default)]
pub struct InstanceCounter {
    issued: AtomicU64,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the next instance number.
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// How many numbers have been issued so far.
    pub fn issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }
}
