//! The primary ordered value store.
//!
//! A [`ValueStore`] is a contiguous `Vec<T>` with a declared element limit.
//! Growth goes through [`ValueStore::reserve`], which checks the limit and
//! makes a fallible reservation before any element moves. The move
//! primitives are infallible once that check has passed.

use varargv_core::{ArgvError, Rejected};

/// An ordered, owned run of opaque values with a hard length limit.
///
/// Values are never inspected. Order is always the logical left-to-right
/// order of the retained sequence; only the explicit head/tail moves below
/// take elements out.
pub struct ValueStore<T> {
    /// Backing storage. Length is the retained count.
    items: Vec<T>,
    /// Maximum number of elements this store may hold.
    limit: usize,
}

impl<T> ValueStore<T> {
    /// Create an empty store with the given limit, reserving
    /// `initial_capacity` slots (clamped to the limit).
    pub fn new(limit: usize, initial_capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(initial_capacity.min(limit)),
            limit,
        }
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Declared element limit.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Allocated slots in the backing storage.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Number of further values the limit still admits.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.items.len())
    }

    /// Whether `additional` more values fit under the declared limit.
    ///
    /// Does not allocate; [`reserve`](Self::reserve) also proves the
    /// allocator can satisfy the growth.
    pub fn can_accept(&self, additional: usize) -> bool {
        additional <= self.remaining()
    }

    /// Make room for `additional` more values.
    ///
    /// On success the next `additional` pushes cannot reallocate. On failure
    /// the store's contents are untouched.
    ///
    /// # Errors
    ///
    /// [`ArgvError::CapacityExceeded`] if the limit would be exceeded or the
    /// allocator refuses the reservation.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArgvError> {
        reserve_run(&mut self.items, additional, self.limit)
    }

    /// Append a whole run after the current contents.
    ///
    /// # Errors
    ///
    /// Returns the run untouched inside [`Rejected`] if it does not fit.
    pub fn push_run(&mut self, mut run: Vec<T>) -> Result<(), Rejected<T>> {
        if let Err(error) = self.reserve(run.len()) {
            return Err(Rejected::new(error, run));
        }
        self.items.append(&mut run);
        Ok(())
    }

    /// Move every element of `src` onto the end of the store, leaving `src`
    /// empty.
    ///
    /// Callers must have reserved `src.len()` slots first.
    pub fn append_from(&mut self, src: &mut Vec<T>) {
        debug_assert!(self.can_accept(src.len()), "append_from without reserve");
        self.items.append(src);
    }

    /// Move the `n` trailing values (clamped to `len`) onto the end of `dst`,
    /// keeping their order.
    pub fn move_tail_into(&mut self, n: usize, dst: &mut Vec<T>) {
        let at = self.items.len() - n.min(self.items.len());
        dst.extend(self.items.drain(at..));
    }

    /// Detach the `n` leading values (clamped to `len`) as a new run.
    pub fn split_head(&mut self, n: usize) -> Vec<T> {
        let n = n.min(self.items.len());
        let tail = self.items.split_off(n);
        std::mem::replace(&mut self.items, tail)
    }

    /// Detach the `n` trailing values (clamped to `len`) as a new run.
    pub fn split_tail(&mut self, n: usize) -> Vec<T> {
        let at = self.items.len() - n.min(self.items.len());
        self.items.split_off(at)
    }

    /// Detach every value, leaving the store empty.
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.items)
    }

    /// Replace the whole contents with `run`, taking ownership of its
    /// allocation.
    ///
    /// # Errors
    ///
    /// Returns the run untouched inside [`Rejected`] if it is longer than the
    /// limit. The previous contents are kept in that case.
    pub fn replace(&mut self, run: Vec<T>) -> Result<(), Rejected<T>> {
        if run.len() > self.limit {
            let error = ArgvError::CapacityExceeded {
                requested: run.len(),
                available: self.limit,
            };
            return Err(Rejected::new(error, run));
        }
        self.items = run;
        Ok(())
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the contents, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

/// Check `limit` and make a fallible reservation of `additional` slots on
/// any growable run, such as a caller's channel.
///
/// # Errors
///
/// [`ArgvError::CapacityExceeded`] if `run.len() + additional` exceeds
/// `limit` or the allocator refuses the reservation.
pub fn reserve_run<T>(run: &mut Vec<T>, additional: usize, limit: usize) -> Result<(), ArgvError> {
    let available = limit.saturating_sub(run.len());
    if additional > available {
        tracing::debug!(additional, available, limit, "store limit reached");
        return Err(ArgvError::CapacityExceeded {
            requested: additional,
            available,
        });
    }
    run.try_reserve(additional).map_err(|err| {
        tracing::debug!(additional, %err, "store reservation refused");
        ArgvError::CapacityExceeded {
            requested: additional,
            available: run.capacity() - run.len(),
        }
    })
}
