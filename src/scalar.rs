use std::fmt::{ Debug, Display };

use rand::distributions::uniform::SampleUniform;
use num_traits::{ Float, NumAssignOps };


/// All continuous scalar types a [LinearModel](crate::LinearModel)
/// can be fitted with.
///
/// This trait gets implemented automatically for all types
/// that satisfy its dependent traits, which in practice
/// means [f32] and [f64].

pub trait Real: Float + NumAssignOps + SampleUniform + std::iter::Sum
  + Debug + Display + Default + Send + Sync + 'static {}

impl<T> Real for T
where
  T: Float + NumAssignOps + SampleUniform + std::iter::Sum
    + Debug + Display + Default + Send + Sync + 'static {}


/// Convert a primitive constant into `R`.
///
/// Every [Real] can represent the small literals used throughout the crate.

#[inline]
pub(crate) fn lit<R: Real>(value: f64) -> R {
  R::from(value).unwrap_or_else(R::nan)
}
