use itertools::Itertools;
use rand::{ Rng, SeedableRng, rngs::StdRng };
use serde::{ Serialize, Deserialize };

use crate::{
  internal::randn,
  scalar::Real,
};


/// Straight line `y = slope * x + intercept` with two trainable scalars.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel<R: Real> {
  slope: R,
  intercept: R,
}

impl<R: Real> LinearModel<R> {
  pub fn new(slope: R, intercept: R) -> Self {
    Self { slope, intercept }
  }

  /// Draw both parameters independently from a standard normal distribution.

  pub fn randn(rng: &mut impl Rng) -> Self {
    let (slope, intercept) = randn(rng);
    Self { slope, intercept }
  }

  /// Like [randn](Self::randn), reproducible for a given `seed`.

  pub fn seeded(seed: u64) -> Self {
    Self::randn(&mut StdRng::seed_from_u64(seed))
  }

  pub fn slope(&self) -> R {
    self.slope
  }

  pub fn intercept(&self) -> R {
    self.intercept
  }

  pub fn predict_one(&self, x: R) -> R {
    self.slope * x + self.intercept
  }

  pub fn predict(&self, x: &[R]) -> Vec<R> {
    x.iter().map(|&x| self.predict_one(x) ).collect()
  }

  /// Gradient with respect to both parameters, given the loss
  /// derivative for each prediction made from `x`.

  pub fn backward(&self, x: &[R], grad: &[R]) -> Gradient<R> {
    x.iter()
      .zip_eq(grad)
      .fold(Gradient::default(), |acc, (&x, &g)| Gradient {
        slope: acc.slope + g * x,
        intercept: acc.intercept + g,
      })
  }

  /// Move both parameters by the given amounts.

  pub fn apply(&mut self, change: &Gradient<R>) {
    self.slope += change.slope;
    self.intercept += change.intercept;
  }

  pub fn state_dict(&self) -> StateDict<R> {
    StateDict { slope: self.slope, intercept: self.intercept }
  }

  pub fn load_state_dict(&mut self, state: &StateDict<R>) {
    self.slope = state.slope;
    self.intercept = state.intercept;
  }

  pub fn from_state_dict(state: &StateDict<R>) -> Self {
    Self::new(state.slope, state.intercept)
  }
}


/// Per-parameter quantity, used both for gradients and parameter updates.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradient<R: Real> {
  pub slope: R,
  pub intercept: R,
}

impl<R: Real> Gradient<R> {
  pub fn scale(&self, factor: R) -> Self {
    Self {
      slope: self.slope * factor,
      intercept: self.intercept * factor,
    }
  }
}


/// The complete set of scalars describing a [LinearModel].

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateDict<R> {
  pub slope: R,
  pub intercept: R,
}

impl<R: Real> std::fmt::Display for StateDict<R> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{{ slope: {}, intercept: {} }}", self.slope, self.intercept)
  }
}
