//! Signed-index resolution for the three buffer operations.
//!
//! Positive magnitudes address the head of a sequence, negative magnitudes
//! the tail. Each operation resolves its control value against the current
//! length before touching any store:
//!
//! | Operation | Resolver | Out-of-range behaviour |
//! |-----------|----------|------------------------|
//! | `set`     | [`Split`]     | reject, return the whole input |
//! | `select`  | [`Selection`] | clamp to the retained count |
//! | `add`     | [`Insertion`] | fall back to head or tail |

/// How `set` divides an incoming run of `argc` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// Keep the whole run; hand nothing back.
    RetainAll,
    /// Hand back the `n` leading values; keep the rest.
    ReturnHead(usize),
    /// Hand back the `n` trailing values; keep the rest.
    ReturnTail(usize),
    /// Keep nothing; hand the whole run back unchanged.
    RejectAll,
}

impl Split {
    /// Resolve the `set` control `n` against an input of `argc` values.
    ///
    /// A magnitude that covers the whole input is a rejection, not a clamp.
    pub fn resolve(n: i64, argc: usize) -> Self {
        if argc == 0 {
            return Self::RejectAll;
        }
        if n == 0 {
            return Self::RetainAll;
        }
        let magnitude = n.unsigned_abs();
        if magnitude >= argc as u64 {
            return Self::RejectAll;
        }
        // magnitude < argc, so it fits in usize.
        let magnitude = magnitude as usize;
        if n > 0 {
            Self::ReturnHead(magnitude)
        } else {
            Self::ReturnTail(magnitude)
        }
    }
}

/// Which end of the retained sequence `select` detaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Detach this many leading values.
    Head(usize),
    /// Detach this many trailing values.
    Tail(usize),
    /// Detach nothing.
    Nothing,
}

impl Selection {
    /// Resolve the `select` control `n` against `count` retained values,
    /// clamping the magnitude to `count`.
    pub fn resolve(n: i64, count: usize) -> Self {
        let magnitude = clamp_to(n.unsigned_abs(), count);
        match n {
            0 => Self::Nothing,
            n if n > 0 => Self::Head(magnitude),
            _ => Self::Tail(magnitude),
        }
    }

    /// Number of values this selection detaches.
    pub fn len(self) -> usize {
        match self {
            Self::Head(n) | Self::Tail(n) => n,
            Self::Nothing => 0,
        }
    }

    /// Returns `true` if nothing is detached.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Where `add` splices a new run into `count` retained values.
///
/// Indices are 1-based: `1` is the head, `count` is before the last value,
/// `-1` is one value from the tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// Append after the last value.
    Tail,
    /// Prepend before the first value.
    Head,
    /// Insert strictly inside the sequence, displacing `shift` trailing
    /// values (`0 < shift < count`).
    Interior {
        /// Number of trailing values that move out of the way.
        shift: usize,
    },
}

impl Insertion {
    /// Resolve the `add` index `idx` against `count` retained values.
    pub fn resolve(idx: i64, count: usize) -> Self {
        let count_u = count as u64;
        if idx == 0 || (idx > 0 && idx.unsigned_abs() > count_u) {
            return Self::Tail;
        }
        if idx == 1 || (idx < 0 && idx.unsigned_abs() >= count_u) {
            return Self::Head;
        }
        // Both magnitudes are now bounded by count.
        let magnitude = idx.unsigned_abs() as usize;
        let shift = if idx > 1 {
            count - magnitude + 1
        } else {
            magnitude
        };
        Self::Interior { shift }
    }

    /// Number of trailing values that must be moved aside before the new
    /// run is appended.
    pub fn shift(self, count: usize) -> usize {
        match self {
            Self::Tail => 0,
            Self::Head => count,
            Self::Interior { shift } => shift,
        }
    }
}

fn clamp_to(magnitude: u64, count: usize) -> usize {
    usize::try_from(magnitude).map_or(count, |m| m.min(count))
}
