// Copyright 2026 The pullstream authors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts concurrently-active guards and records the high-water mark.
///
/// A test wraps each unit of work it wants counted in [`enter`]
/// (ConcurrencyProbe::enter); the guard decrements on drop. After the run,
/// [`peak`](ConcurrencyProbe::peak) is the maximum number of guards that
/// were ever alive at once.
///
/// # Examples
///
/// ```
/// use pullstream_test_utils::ConcurrencyProbe;
///
/// let probe = ConcurrencyProbe::new();
/// {
///     let _a = probe.enter();
///     let _b = probe.enter();
///     assert_eq!(probe.active(), 2);
/// }
/// assert_eq!(probe.active(), 0);
/// assert_eq!(probe.peak(), 2);
/// ```
#[derive(Clone, Default)]
pub struct ConcurrencyProbe {
    active: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl ConcurrencyProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one unit of work active until the returned guard drops.
    pub fn enter(&self) -> ProbeGuard {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        ProbeGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of guards currently alive.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }

    /// Maximum number of guards that were alive at the same time.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

/// RAII guard returned by [`ConcurrencyProbe::enter`].
pub struct ProbeGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for ProbeGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}
