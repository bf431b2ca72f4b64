//! Dynamically-typed host parameters and integer coercion.
//!
//! A scripting host passes numeric controls (`n`, `idx`) as loosely typed
//! values. [`check_integer`] and [`opt_integer`] read them the way such hosts
//! usually do: exact floats and numeric strings coerce, everything else is an
//! [`ArgvError::InvalidArgument`].

use smallvec::SmallVec;
use std::fmt;

use crate::error::ArgvError;

/// Inline parameter list. Every buffer method takes at most two controls.
pub type Params = SmallVec<[Param; 2]>;

/// A single loosely-typed parameter as received from a host.
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// Absent or explicit nil.
    Nil,
    /// An integer value.
    Integer(i64),
    /// A floating-point value; accepted only when it is integral.
    Number(f64),
    /// A string; accepted only when it spells an integral number.
    Text(String),
}

impl Param {
    /// Host-facing type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Integer(_) | Self::Number(_) => "number",
            Self::Text(_) => "string",
        }
    }

    /// Coerce to an integer, or `None` if the value has no exact integer
    /// representation.
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Nil => None,
            Self::Integer(v) => Some(*v),
            Self::Number(v) => float_to_integer(*v),
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_integer))
            }
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for Param {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Param {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Param {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

fn float_to_integer(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Read the mandatory integer parameter at `index`.
///
/// # Errors
///
/// [`ArgvError::InvalidArgument`] if the parameter is missing, nil, or has
/// no exact integer representation.
pub fn check_integer(
    params: &[Param],
    index: usize,
    name: &'static str,
) -> Result<i64, ArgvError> {
    let param = match params.get(index) {
        None | Some(Param::Nil) => {
            return Err(ArgvError::invalid(name, "number expected, got no value"));
        }
        Some(param) => param,
    };
    param.to_integer().ok_or_else(|| {
        ArgvError::invalid(
            name,
            format!(
                "number has no integer representation (got {} {param})",
                param.type_name()
            ),
        )
    })
}

/// Read the optional integer parameter at `index`, falling back to `default`
/// when it is missing or nil.
///
/// # Errors
///
/// [`ArgvError::InvalidArgument`] if the parameter is present but has no
/// exact integer representation.
pub fn opt_integer(
    params: &[Param],
    index: usize,
    name: &'static str,
    default: i64,
) -> Result<i64, ArgvError> {
    match params.get(index) {
        None | Some(Param::Nil) => Ok(default),
        Some(_) => check_integer(params, index, name),
    }
}
