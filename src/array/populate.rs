use tracing::debug;

use super::UtilityArray;
use crate::error::ArrayError;
use crate::value::{Number, Value};

// ─── PopulateCount ──────────────────────────────────────────────────────────

/// Anything that can be validated into an element count.
///
/// Negative, fractional and non-finite counts are rejected rather than
/// truncated.
pub trait PopulateCount {
    fn into_count(self) -> Result<usize, ArrayError>;
}

macro_rules! impl_populate_count_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl PopulateCount for $t {
                #[inline]
                fn into_count(self) -> Result<usize, ArrayError> {
                    usize::try_from(self).map_err(|_| {
                        ArrayError::InvalidArgument(format!("count {self} is not a valid length"))
                    })
                }
            }
        )*
    };
}

impl_populate_count_int!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

impl PopulateCount for f64 {
    fn into_count(self) -> Result<usize, ArrayError> {
        if !self.is_finite() || self.fract() != 0.0 || self < 0.0 || self >= usize::MAX as f64 {
            return Err(ArrayError::InvalidArgument(format!(
                "count {self} is not a valid length"
            )));
        }
        Ok(self as usize)
    }
}

impl PopulateCount for f32 {
    #[inline]
    fn into_count(self) -> Result<usize, ArrayError> {
        f64::from(self).into_count()
    }
}

impl PopulateCount for Number {
    fn into_count(self) -> Result<usize, ArrayError> {
        match self {
            Number::I64(i) => i.into_count(),
            Number::U64(u) => u.into_count(),
            Number::F64(f) => f.into_count(),
        }
    }
}

impl PopulateCount for &Value {
    fn into_count(self) -> Result<usize, ArrayError> {
        match self {
            Value::Number(n) => n.into_count(),
            other => Err(ArrayError::InvalidArgument(format!(
                "count must be a number, got {other:?}"
            ))),
        }
    }
}

// ─── Free functions ─────────────────────────────────────────────────────────

/// An empty vector with room for exactly `count` elements, or `InvalidArgument`
/// when that much memory cannot be reserved.
fn reserve_exact<T>(count: usize) -> Result<Vec<T>, ArrayError> {
    let mut items = Vec::new();
    items.try_reserve_exact(count).map_err(|err| {
        ArrayError::InvalidArgument(format!("count {count} cannot be allocated: {err}"))
    })?;
    Ok(items)
}

/// Build a vector of `count` clones of `element`.
///
/// Composite [`Value`]s and `Arc`/`Rc` payloads clone by reference, so every
/// slot then shares one instance.
pub fn populated_array<T: Clone>(count: impl PopulateCount, element: T) -> Result<Vec<T>, ArrayError> {
    let count = count.into_count()?;
    let mut items = reserve_exact(count)?;
    debug!(count, "populating with a repeated element");
    items.resize(count, element);
    Ok(items)
}

/// Build a vector by calling `factory` once per index, in ascending order.
pub fn populated_array_with<T>(
    count: impl PopulateCount,
    factory: impl FnMut(usize) -> T,
) -> Result<Vec<T>, ArrayError> {
    let count = count.into_count()?;
    let mut items = reserve_exact(count)?;
    debug!(count, "populating from a factory");
    items.extend((0..count).map(factory));
    Ok(items)
}

impl<T> UtilityArray<T> {
    /// See [`populated_array`].
    pub fn populate(count: impl PopulateCount, element: T) -> Result<Self, ArrayError>
    where
        T: Clone,
    {
        populated_array(count, element).map(Self::from)
    }

    /// See [`populated_array_with`].
    pub fn populate_with(
        count: impl PopulateCount,
        factory: impl FnMut(usize) -> T,
    ) -> Result<Self, ArrayError> {
        populated_array_with(count, factory).map(Self::from)
    }
}
