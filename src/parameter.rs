//! Per-step camera attribute transformations.
//!
//! A `Parameter` maps the current value of a camera attribute (altitude, pitch or
//! heading) to the value the next flyover step animates toward.

use std::fmt;
use std::ops::Add;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Floating point types a `Parameter` can operate on.
pub trait ParameterValue:
    Copy + Add<Output = Self> + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    /// Clamps into `[lower, upper]`. NaN clamps to `upper`.
    fn clamp_to(self, lower: Self, upper: Self) -> Self;
}

macro_rules! impl_parameter_value {
    ($($ty:ty),*) => {
        $(
            impl ParameterValue for $ty {
                fn clamp_to(self, lower: Self, upper: Self) -> Self { self.min(upper).max(lower) }
            }
        )*
    };
}

impl_parameter_value!(f32, f64);

type UpdateFn<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

#[derive(Clone)]
enum Update<V: ParameterValue> {
    Constant(V),
    Increment(V),
    Restricted {
        parameter: Box<Parameter<V>>,
        lower:     V,
        upper:     V,
    },
    Custom(UpdateFn<V>),
}

/// A pure `V -> V` transformation applied once per flyover step.
///
/// Equality is structural for `constant`, `increment` and `restricted`
/// parameters. Parameters built with [`Parameter::from_fn`] are only equal to
/// clones of themselves.
#[derive(Clone)]
pub struct Parameter<V: ParameterValue>(Update<V>);

impl<V: ParameterValue> Parameter<V> {
    /// Ignores the current value and always yields `value`.
    pub const fn constant(value: V) -> Self { Self(Update::Constant(value)) }

    /// Adds `step` to the current value.
    pub const fn increment(step: V) -> Self { Self(Update::Increment(step)) }

    /// Wraps an arbitrary update closure.
    pub fn from_fn(update: impl Fn(V) -> V + Send + Sync + 'static) -> Self {
        Self(Update::Custom(Arc::new(update)))
    }

    /// Clamps the output of `parameter` into `range`.
    ///
    /// Restricting an already restricted parameter narrows its bounds instead of
    /// replacing them, so the result always lies inside both ranges when they
    /// overlap and inside `range` when they don't.
    pub fn restricted(parameter: Self, range: RangeInclusive<V>) -> Self {
        let (mut lower, mut upper) = range.into_inner();
        if lower > upper {
            std::mem::swap(&mut lower, &mut upper);
        }

        match parameter.0 {
            Update::Restricted {
                parameter,
                lower: inner_lower,
                upper: inner_upper,
            } => Self(Update::Restricted {
                parameter,
                lower: inner_lower.clamp_to(lower, upper),
                upper: inner_upper.clamp_to(lower, upper),
            }),
            update => Self(Update::Restricted {
                parameter: Box::new(Self(update)),
                lower,
                upper,
            }),
        }
    }

    /// Computes the next value from `current`.
    pub fn apply(&self, current: V) -> V {
        match &self.0 {
            Update::Constant(value) => *value,
            Update::Increment(step) => current + *step,
            Update::Restricted {
                parameter,
                lower,
                upper,
            } => parameter.apply(current).clamp_to(*lower, *upper),
            Update::Custom(update) => update(current),
        }
    }

    /// Bounds enforced on the output, if this parameter is restricted.
    pub fn bounds(&self) -> Option<RangeInclusive<V>> {
        match &self.0 {
            Update::Restricted { lower, upper, .. } => Some(*lower..=*upper),
            _ => None,
        }
    }
}

impl<V: ParameterValue> From<V> for Parameter<V> {
    fn from(value: V) -> Self { Self::constant(value) }
}

impl<V: ParameterValue> PartialEq for Parameter<V> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Update::Constant(a), Update::Constant(b)) | (Update::Increment(a), Update::Increment(b)) => {
                a == b
            },
            (
                Update::Restricted {
                    parameter: a,
                    lower: a_lower,
                    upper: a_upper,
                },
                Update::Restricted {
                    parameter: b,
                    lower: b_lower,
                    upper: b_upper,
                },
            ) => a == b && a_lower == b_lower && a_upper == b_upper,
            (Update::Custom(a), Update::Custom(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
            _ => false,
        }
    }
}

impl<V: ParameterValue> fmt::Debug for Parameter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Update::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Update::Increment(step) => f.debug_tuple("Increment").field(step).finish(),
            Update::Restricted {
                parameter,
                lower,
                upper,
            } => f
                .debug_struct("Restricted")
                .field("parameter", parameter)
                .field("lower", lower)
                .field("upper", upper)
                .finish(),
            Update::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
