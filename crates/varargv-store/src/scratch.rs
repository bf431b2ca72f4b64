//! Transient parking space for values that must stay out of the way of
//! index arithmetic on the primary store.
//!
//! [`ScratchStore`] is acquired through [`ScratchStore::park`], which returns
//! a [`ScratchGuard`]. The guard hands the parked run back with
//! [`ScratchGuard::release_into`], and truncates the region when dropped, so
//! the scratch store is empty again on every exit path. The backing
//! allocation is reused across operations, up to a retention bound.

/// Allocation the scratch store keeps between operations, in elements,
/// unless its initial capacity was larger.
pub const RETAINED_CAPACITY: usize = 64;

/// Reusable parking region for a single run of values.
pub struct ScratchStore<T> {
    /// Backing storage.
    data: Vec<T>,
    /// Allocation kept once a guard is dropped.
    retain: usize,
}

impl<T> ScratchStore<T> {
    /// Create an empty scratch store with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(initial_capacity),
            retain: initial_capacity.max(RETAINED_CAPACITY),
        }
    }

    /// Park `values` for the duration of the returned guard.
    ///
    /// Never allocates: a run that does not fit the existing allocation
    /// donates its own allocation to the region instead.
    pub fn park(&mut self, mut values: Vec<T>) -> ScratchGuard<'_, T> {
        debug_assert!(self.data.is_empty(), "scratch store parked twice");
        if self.data.capacity() - self.data.len() >= values.len() {
            self.data.append(&mut values);
        } else {
            self.data.clear();
            self.data = values;
        }
        ScratchGuard { region: self }
    }

    /// Number of values currently parked.
    pub fn used(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if nothing is parked.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Total capacity of the backing storage in elements.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drop anything parked.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Scoped access to a parked run.
///
/// Dropping the guard without releasing drops the parked values.
pub struct ScratchGuard<'a, T> {
    region: &'a mut ScratchStore<T>,
}

impl<T> ScratchGuard<'_, T> {
    /// Number of values parked under this guard.
    pub fn len(&self) -> usize {
        self.region.data.len()
    }

    /// Returns `true` if the parked run is empty.
    pub fn is_empty(&self) -> bool {
        self.region.data.is_empty()
    }

    /// Move the parked run onto the end of `dst`, in order.
    pub fn release_into(mut self, dst: &mut Vec<T>) {
        if dst.is_empty() && dst.capacity() < self.region.data.len() {
            std::mem::swap(dst, &mut self.region.data);
        } else {
            dst.append(&mut self.region.data);
        }
    }
}

impl<T> Drop for ScratchGuard<'_, T> {
    fn drop(&mut self) {
        self.region.data.clear();
        // An oversized run may have donated its allocation; give it back.
        if self.region.data.capacity() > self.region.retain {
            self.region.data.shrink_to(self.region.retain);
        }
    }
}
