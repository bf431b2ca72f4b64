//! The argument buffer: a retained run of opaque values with head/tail
//! extraction and positional splicing.

use std::fmt;

use varargv_core::{ArgvError, BufferConfig, Rejected};
use varargv_store::{reserve_run, ScratchStore, ValueStore};

use crate::position::{Insertion, Selection, Split};

/// An ordered buffer of opaque call arguments.
///
/// Backed by two stores: the primary [`ValueStore`], whose length is the
/// retained count, and a [`ScratchStore`] that only holds values while a
/// single operation is running. Between operations the scratch store is
/// always empty.
///
/// # Example
///
/// ```
/// use varargv::ArgBuffer;
///
/// let mut argv = ArgBuffer::new();
///
/// // Keep the trailing two arguments, hand the first one back.
/// let (n, head) = argv.set(1, vec!["self", "a", "b"]).unwrap();
/// assert_eq!((n, head), (1, vec!["self"]));
///
/// // Splice before the second retained value.
/// argv.add(2, vec!["x"]).unwrap();
/// assert_eq!(argv.select(None, vec![]), vec!["a", "x", "b"]);
/// assert!(argv.is_empty());
/// ```
pub struct ArgBuffer<T> {
    /// Retained values, in logical order.
    store: ValueStore<T>,
    /// Parking region for caller-supplied extras during `select`.
    scratch: ScratchStore<T>,
}

impl<T> ArgBuffer<T> {
    /// Create an empty buffer with the default configuration.
    pub fn new() -> Self {
        Self::from_config(&BufferConfig::default())
    }

    /// Create an empty buffer from an explicit configuration.
    ///
    /// # Errors
    ///
    /// [`ArgvError::InvalidArgument`] if the configuration is inconsistent.
    pub fn with_config(config: BufferConfig) -> Result<Self, ArgvError> {
        config.validate()?;
        Ok(Self::from_config(&config))
    }

    fn from_config(config: &BufferConfig) -> Self {
        Self {
            store: ValueStore::new(config.max_len, config.initial_capacity),
            scratch: ScratchStore::new(0),
        }
    }

    /// Number of retained values.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no values are retained.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Declared capacity: the most values this buffer may retain.
    pub fn limit(&self) -> usize {
        self.store.limit()
    }

    /// Number of values sitting in the scratch store. Always 0 between
    /// operations.
    pub fn scratch_len(&self) -> usize {
        self.scratch.used()
    }

    /// Replace the retained sequence with `values`, handing part of it back.
    ///
    /// With `argc = values.len()`:
    ///
    /// - `n == 0` keeps all of `values` and returns `(0, [])`.
    /// - `0 < n < argc` keeps the trailing `argc - n` and returns the
    ///   leading `n`.
    /// - `-argc < n < 0` keeps the leading `argc + n` and returns the
    ///   trailing `-n`.
    /// - `|n| >= argc` keeps nothing and returns `(argc, values)` unchanged.
    ///
    /// Whatever was retained before is discarded, on every outcome.
    ///
    /// # Errors
    ///
    /// [`ArgvError::CapacityExceeded`] if the kept run is longer than the
    /// declared capacity. The buffer is left empty and `values` come back
    /// whole inside [`Rejected`].
    pub fn set(&mut self, n: i64, mut values: Vec<T>) -> Result<(usize, Vec<T>), Rejected<T>> {
        let argc = values.len();
        self.store.clear();
        let outcome = match Split::resolve(n, argc) {
            Split::RetainAll => {
                self.store.replace(values).map_err(|r| self.reject(r))?;
                (0, Vec::new())
            }
            Split::ReturnHead(k) => {
                let kept = values.split_off(k);
                if let Err(mut rejected) = self.store.replace(kept) {
                    values.append(&mut rejected.values);
                    return Err(self.reject(Rejected::new(rejected.error, values)));
                }
                (k, values)
            }
            Split::ReturnTail(k) => {
                let overflow = values.split_off(argc - k);
                if let Err(mut rejected) = self.store.replace(values) {
                    rejected.values.extend(overflow);
                    return Err(self.reject(rejected));
                }
                (k, overflow)
            }
            Split::RejectAll => (argc, values),
        };
        tracing::trace!(n, argc, retained = self.store.len(), "set");
        Ok(outcome)
    }

    /// Detach a prefix or suffix of the retained sequence, followed by
    /// `extras`.
    ///
    /// `n` defaults to the retained count. Positive `n` detaches up to `n`
    /// leading values, negative `n` up to `-n` trailing values, and `0`
    /// detaches nothing. Magnitudes larger than the count are clamped.
    /// When the buffer is empty, `extras` come back unchanged.
    pub fn select(&mut self, n: Option<i64>, extras: Vec<T>) -> Vec<T> {
        let count = self.store.len();
        if count == 0 {
            return extras;
        }

        let selection = n.map_or(Selection::Head(count), |n| Selection::resolve(n, count));
        let parked = self.scratch.park(extras);
        let mut out = match selection {
            Selection::Head(k) if k == count => self.store.take_all(),
            Selection::Head(k) => self.store.split_head(k),
            Selection::Tail(k) => self.store.split_tail(k),
            Selection::Nothing => Vec::with_capacity(parked.len()),
        };
        parked.release_into(&mut out);

        tracing::trace!(
            ?n,
            detached = selection.len(),
            retained = self.store.len(),
            "select"
        );
        out
    }

    /// Splice `values` into the retained sequence at the 1-based signed
    /// position `idx`.
    ///
    /// - `idx == 0` or `idx > len` appends.
    /// - `idx == 1` or `-idx >= len` prepends.
    /// - `1 < idx <= len` inserts before the value at `idx`.
    /// - `-len < idx < 0` inserts `-idx` values from the tail.
    ///
    /// An empty `values` run is a no-op. The trailing values at and after
    /// the insertion point are moved onto the end of `values`, and the whole
    /// run is then appended to the store.
    ///
    /// # Errors
    ///
    /// [`ArgvError::CapacityExceeded`] if the store, or `values` while it
    /// carries the displaced tail, cannot grow. Nothing is mutated and
    /// `values` come back inside [`Rejected`].
    pub fn add(&mut self, idx: i64, mut values: Vec<T>) -> Result<(), Rejected<T>> {
        if values.is_empty() {
            return Ok(());
        }

        let count = self.store.len();
        let added = values.len();
        if let Err(error) = self.store.reserve(added) {
            return Err(self.reject(Rejected::new(error, values)));
        }

        let shift = Insertion::resolve(idx, count).shift(count);
        if shift > 0 {
            if let Err(error) = reserve_run(&mut values, shift, self.store.limit()) {
                return Err(self.reject(Rejected::new(error, values)));
            }
            self.store.move_tail_into(shift, &mut values);
        }
        self.store.append_from(&mut values);

        tracing::trace!(idx, added, shift, retained = self.store.len(), "add");
        Ok(())
    }

    /// Drop every retained value.
    pub fn clear(&mut self) {
        self.store.clear();
        self.scratch.clear();
    }

    fn reject(&self, rejected: Rejected<T>) -> Rejected<T> {
        tracing::debug!(
            error = %rejected.error,
            retained = self.store.len(),
            "argument buffer operation rejected"
        );
        rejected
    }
}

impl<T> Default for ArgBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArgBuffer<T> {
    fn drop(&mut self) {
        tracing::trace!(retained = self.store.len(), "argument buffer released");
        self.clear();
    }
}

/// Identity-based: prints the buffer's address, never its contents.
impl<T> fmt::Display for ArgBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argv: {:p}", self)
    }
}

impl<T> fmt::Debug for ArgBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgBuffer")
            .field("len", &self.store.len())
            .field("limit", &self.store.limit())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<T: Clone>(argv: &ArgBuffer<T>) -> Vec<T> {
        argv.store.as_slice().to_vec()
    }

    fn filled(values: &[&'static str]) -> ArgBuffer<&'static str> {
        let mut argv = ArgBuffer::new();
        argv.set(0, values.to_vec()).unwrap();
        argv
    }

    fn small(limit: usize, values: &[&'static str]) -> ArgBuffer<&'static str> {
        let mut argv = ArgBuffer::with_config(BufferConfig::with_max_len(limit)).unwrap();
        argv.set(0, values.to_vec()).unwrap();
        argv
    }

    // ── new / len ──────────────────────────────────────────────────

    #[test]
    fn new_buffer_is_empty() {
        let argv: ArgBuffer<u8> = ArgBuffer::new();
        assert_eq!(argv.len(), 0);
        assert!(argv.is_empty());
        assert_eq!(argv.scratch_len(), 0);
        assert_eq!(argv.limit(), BufferConfig::DEFAULT_MAX_LEN);
    }

    #[test]
    fn inconsistent_config_is_rejected() {
        let config = BufferConfig {
            max_len: 1,
            initial_capacity: 2,
        };
        assert!(ArgBuffer::<u8>::with_config(config).is_err());
    }

    // ── set ────────────────────────────────────────────────────────

    #[test]
    fn set_zero_retains_everything() {
        let mut argv = ArgBuffer::new();
        assert_eq!(argv.set(0, vec![1, 2, 3]).unwrap(), (0, vec![]));
        assert_eq!(contents(&argv), vec![1, 2, 3]);
    }

    #[test]
    fn set_positive_returns_head() {
        let mut argv = ArgBuffer::new();
        assert_eq!(argv.set(2, vec![1, 2, 3, 4]).unwrap(), (2, vec![1, 2]));
        assert_eq!(contents(&argv), vec![3, 4]);
    }

    #[test]
    fn set_negative_returns_tail() {
        let mut argv = ArgBuffer::new();
        assert_eq!(argv.set(-1, vec![1, 2, 3, 4]).unwrap(), (1, vec![4]));
        assert_eq!(contents(&argv), vec![1, 2, 3]);
    }

    #[test]
    fn set_covering_magnitude_returns_everything() {
        let mut argv = filled(&["old"]);
        assert_eq!(argv.set(3, vec!["a", "b", "c"]).unwrap(), (3, vec!["a", "b", "c"]));
        assert!(argv.is_empty());

        let mut argv = filled(&["old"]);
        assert_eq!(argv.set(-7, vec!["a", "b"]).unwrap(), (2, vec!["a", "b"]));
        assert!(argv.is_empty());
    }

    #[test]
    fn set_empty_input_clears() {
        let mut argv = filled(&["a", "b"]);
        assert_eq!(argv.set(1, vec![]).unwrap(), (0, vec![]));
        assert!(argv.is_empty());
    }

    #[test]
    fn set_overwrites_previous_contents() {
        let mut argv = filled(&["a", "b", "c"]);
        argv.set(0, vec!["z"]).unwrap();
        assert_eq!(contents(&argv), vec!["z"]);
    }

    #[test]
    fn set_over_capacity_clears_buffer_and_returns_input() {
        let mut argv = small(2, &["old1", "old2"]);
        let rejected = argv.set(0, vec!["a", "b", "c"]).unwrap_err();
        assert!(rejected.error.is_capacity());
        assert_eq!(rejected.values, vec!["a", "b", "c"]);
        assert!(argv.is_empty());
        assert_eq!(argv.scratch_len(), 0);

        let mut argv = small(2, &["keep"]);
        let rejected = argv.set(1, vec!["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(rejected.values, vec!["a", "b", "c", "d"]);
        assert!(argv.is_empty());

        let mut argv = small(2, &["keep"]);
        let rejected = argv.set(-1, vec!["a", "b", "c", "d"]).unwrap_err();
        assert_eq!(rejected.values, vec!["a", "b", "c", "d"]);
        assert!(argv.is_empty());
    }

    #[test]
    fn set_within_small_capacity_succeeds() {
        let mut argv = small(2, &[]);
        assert_eq!(argv.set(2, vec!["a", "b", "c", "d"]).unwrap(), (2, vec!["a", "b"]));
        assert_eq!(contents(&argv), vec!["c", "d"]);
    }

    // ── select ─────────────────────────────────────────────────────

    #[test]
    fn select_default_takes_everything() {
        let mut argv = filled(&["a", "b", "c"]);
        assert_eq!(argv.select(None, vec![]), vec!["a", "b", "c"]);
        assert!(argv.is_empty());
    }

    #[test]
    fn select_positive_detaches_head() {
        let mut argv = filled(&["a", "b", "c"]);
        assert_eq!(argv.select(Some(2), vec![]), vec!["a", "b"]);
        assert_eq!(contents(&argv), vec!["c"]);
    }

    #[test]
    fn select_negative_detaches_tail() {
        let mut argv = filled(&["a", "b", "c"]);
        assert_eq!(argv.select(Some(-2), vec![]), vec!["b", "c"]);
        assert_eq!(contents(&argv), vec!["a"]);
    }

    #[test]
    fn select_appends_extras_after_detached() {
        let mut argv = filled(&["a", "b", "c"]);
        assert_eq!(argv.select(Some(1), vec!["x", "y"]), vec!["a", "x", "y"]);
        assert_eq!(contents(&argv), vec!["b", "c"]);
        assert_eq!(argv.scratch_len(), 0);
    }

    #[test]
    fn select_zero_returns_only_extras() {
        let mut argv = filled(&["a"]);
        assert_eq!(argv.select(Some(0), vec!["x"]), vec!["x"]);
        assert_eq!(contents(&argv), vec!["a"]);
    }

    #[test]
    fn select_on_empty_returns_extras() {
        let mut argv: ArgBuffer<&str> = ArgBuffer::new();
        assert_eq!(argv.select(Some(3), vec!["x"]), vec!["x"]);
        assert!(argv.is_empty());
    }

    #[test]
    fn select_clamps_large_magnitudes() {
        let mut argv = filled(&["a", "b"]);
        assert_eq!(argv.select(Some(i64::MAX), vec![]), vec!["a", "b"]);
        assert!(argv.is_empty());

        let mut argv = filled(&["a", "b"]);
        assert_eq!(argv.select(Some(i64::MIN), vec!["x"]), vec!["a", "b", "x"]);
        assert!(argv.is_empty());
    }

    // ── add ────────────────────────────────────────────────────────

    #[test]
    fn add_interior_positive() {
        let mut argv = filled(&["a", "b", "c", "d"]);
        argv.add(2, vec!["x", "y"]).unwrap();
        assert_eq!(contents(&argv), vec!["a", "x", "y", "b", "c", "d"]);
    }

    #[test]
    fn add_interior_negative() {
        let mut argv = filled(&["a", "b", "c", "d"]);
        argv.add(-1, vec!["x", "y"]).unwrap();
        assert_eq!(contents(&argv), vec!["a", "b", "c", "x", "y", "d"]);
    }

    #[test]
    fn add_head_and_tail() {
        let mut argv = filled(&["a", "b"]);
        argv.add(1, vec!["h"]).unwrap();
        argv.add(0, vec!["t"]).unwrap();
        argv.add(99, vec!["u"]).unwrap();
        argv.add(-99, vec!["g"]).unwrap();
        assert_eq!(contents(&argv), vec!["g", "h", "a", "b", "t", "u"]);
    }

    #[test]
    fn add_at_last_position_inserts_before_last() {
        let mut argv = filled(&["a", "b", "c"]);
        argv.add(3, vec!["x"]).unwrap();
        assert_eq!(contents(&argv), vec!["a", "b", "x", "c"]);
    }

    #[test]
    fn add_empty_is_noop() {
        let mut argv = small(1, &["a"]);
        assert!(argv.add(1, vec![]).is_ok());
        assert_eq!(contents(&argv), vec!["a"]);
    }

    #[test]
    fn add_over_capacity_changes_nothing() {
        let mut argv = small(4, &["a", "b", "c"]);
        let rejected = argv.add(2, vec!["x", "y"]).unwrap_err();
        assert_eq!(
            rejected.error,
            ArgvError::CapacityExceeded {
                requested: 2,
                available: 1,
            }
        );
        assert_eq!(rejected.values, vec!["x", "y"]);
        assert_eq!(contents(&argv), vec!["a", "b", "c"]);
        assert_eq!(argv.scratch_len(), 0);
    }

    #[test]
    fn add_fills_exactly_to_capacity() {
        let mut argv = small(4, &["a", "b", "c"]);
        argv.add(-1, vec!["x"]).unwrap();
        assert_eq!(contents(&argv), vec!["a", "b", "x", "c"]);
        assert!(argv.add(0, vec!["y"]).is_err());
    }

    // ── lifecycle / representation ─────────────────────────────────

    #[test]
    fn display_is_identity_based() {
        let argv = filled(&["secret"]);
        let text = argv.to_string();
        assert!(text.starts_with("argv: 0x"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn debug_is_opaque() {
        let argv = filled(&["secret"]);
        let text = format!("{argv:?}");
        assert!(text.contains("len: 1"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn drop_releases_values() {
        use std::rc::Rc;

        let value = Rc::new(());
        {
            let mut argv = ArgBuffer::new();
            argv.set(0, vec![Rc::clone(&value), Rc::clone(&value)]).unwrap();
            assert_eq!(Rc::strong_count(&value), 3);
        }
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn len_is_idempotent() {
        let argv = filled(&["a", "b"]);
        for _ in 0..5 {
            assert_eq!(argv.len(), 2);
        }
    }
}
