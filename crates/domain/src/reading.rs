//! Numeric sensor reading.

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single numeric value reported by a sensor (temperature, ppm, …).
///
/// Whole values serialize as JSON integers (`-8`) and fractional ones as
/// floats (`0.6`), which keeps payloads identical to what hand-written
/// fixtures contain.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Reading(f64);

impl Reading {
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    fn as_exact_integer(self) -> Option<i64> {
        if self.0.is_finite() && self.0.abs() <= MAX_EXACT_INTEGER && self.0.trunc() == self.0 {
            Some(self.0 as i64)
        } else {
            None
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Reading {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_exact_integer() {
            Some(int) => serializer.serialize_i64(int),
            None => serializer.serialize_f64(self.0),
        }
    }
}
