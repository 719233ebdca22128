use itertools::Itertools;

use crate::{
  internal::sign,
  scalar::Real,
};


/// Loss function that can also compute its derivative
/// with respect to each prediction.

pub trait Loss<R: Real> {
  fn compute(&self, prediction: &[R], target: &[R]) -> R;
  fn derive(&self, prediction: &[R], target: &[R]) -> Vec<R>;
}


/// Mean absolute error (L1 loss).

#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAbsoluteError;

impl<R: Real> Loss<R> for MeanAbsoluteError {
  fn compute(&self, prediction: &[R], target: &[R]) -> R {
    if prediction.is_empty() { return R::zero() }
    let n = R::from(prediction.len()).unwrap_or_else(R::one);
    prediction.iter()
      .zip_eq(target)
      .map(|(&p, &t)| (p - t).abs() )
      .sum::<R>() / n
  }

  fn derive(&self, prediction: &[R], target: &[R]) -> Vec<R> {
    let n = R::from(prediction.len()).unwrap_or_else(R::one);
    prediction.iter()
      .zip_eq(target)
      .map(|(&p, &t)| sign(p - t) / n )
      .collect()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn mean_absolute() {
    let loss: f64 = MeanAbsoluteError.compute(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 1.0, 4.5]);
    assert_eq!(loss, (1.0 + 0.0 + 2.0 + 0.5) / 4.0);
  }

  #[test]
  fn empty() {
    let loss: f32 = MeanAbsoluteError.compute(&[], &[]);
    assert_eq!(loss, 0.0);
    assert!(Loss::<f32>::derive(&MeanAbsoluteError, &[], &[]).is_empty());
  }

  #[test]
  fn derivative_is_scaled_sign() {
    let grad: Vec<f64> = MeanAbsoluteError.derive(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 1.0, 4.5]);
    assert_eq!(grad, vec![-0.25, 0.0, 0.25, -0.25]);
  }

  #[test]
  #[should_panic]
  fn length_mismatch() {
    MeanAbsoluteError.compute(&[1.0f32, 2.0], &[1.0]);
  }
}
