use itertools::Itertools;
use serde::{ Serialize, Deserialize };

use crate::{
  error::{ Error, Result },
  scalar::{ Real, lit },
};


/// Parameters of a noiseless synthetic line `y = weight * x + bias`,
/// sampled at `num_points` evenly spaced positions over `[start, end]`.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
  pub start: f64,
  pub end: f64,
  pub num_points: usize,
  pub weight: f64,
  pub bias: f64,
}

impl Default for DataConfig {
  fn default() -> Self {
    Self {
      start: 0.0,
      end: 1.0,
      num_points: 100,
      weight: 0.3,
      bias: 0.9,
    }
  }
}


/// Ordered sequence of `(x, y)` pairs.

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<R: Real> {
  x: Vec<R>,
  y: Vec<R>,
}

impl<R: Real> Dataset<R> {
  pub fn new(x: Vec<R>, y: Vec<R>) -> Self {
    assert_eq!(x.len(), y.len(),
      "Inputs of length {} don't match targets of length {}", x.len(), y.len());
    Self { x, y }
  }

  /// Sample the line described by `config`.

  pub fn linear(config: &DataConfig) -> Self {
    let weight: R = lit(config.weight);
    let bias: R = lit(config.bias);
    let x = linspace(lit(config.start), lit(config.end), config.num_points);
    let y = x.iter().map(|&x| weight * x + bias ).collect();
    Self { x, y }
  }

  pub fn x(&self) -> &[R] {
    &self.x
  }

  pub fn y(&self) -> &[R] {
    &self.y
  }

  pub fn len(&self) -> usize {
    self.x.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (R, R)> + '_ {
    self.x.iter().copied().zip_eq(self.y.iter().copied())
  }

  /// Contiguous, order preserving split into the first
  /// `floor(fraction * len)` pairs and the remainder.

  pub fn split(&self, fraction: f64) -> Result<Split<R>> {
    if !(0.0..=1.0).contains(&fraction) {
      return Err(Error::InvalidConfig(format!("split fraction {fraction} is outside [0, 1]")))
    }
    let at = ((fraction * self.len() as f64).floor() as usize).min(self.len());
    let (train_x, test_x) = self.x.split_at(at);
    let (train_y, test_y) = self.y.split_at(at);
    Ok(Split {
      train: Self::new(train_x.to_vec(), train_y.to_vec()),
      test: Self::new(test_x.to_vec(), test_y.to_vec()),
    })
  }
}


/// Disjoint train and test portions of a [Dataset].

#[derive(Debug, Clone, PartialEq)]
pub struct Split<R: Real> {
  pub train: Dataset<R>,
  pub test: Dataset<R>,
}


/// `num` evenly spaced values from `start` to `end`, both inclusive.

pub fn linspace<R: Real>(start: R, end: R, num: usize) -> Vec<R> {
  match num {
    0 => vec![],
    1 => vec![start],
    _ => {
      let step = (end - start) / lit(num as f64 - 1.0);
      (0..num).map(|i| lit::<R>(i as f64) * step + start ).collect()
    },
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_line() {
    let data: Dataset<f64> = Dataset::linear(&DataConfig::default());
    assert_eq!(data.len(), 100);
    assert_eq!(data.x()[0], 0.0);
    assert!((data.x()[99] - 1.0).abs() < 1e-12);
    for (x, y) in data.iter() {
      assert_eq!(y, 0.3 * x + 0.9);
    }
  }

  #[test]
  fn even_spacing() {
    let data: Dataset<f64> = Dataset::linear(&DataConfig::default());
    let step = 1.0 / 99.0;
    for (a, b) in data.x().iter().tuple_windows() {
      assert!((b - a - step).abs() < 1e-12);
    }
  }

  #[test]
  fn linspace_edges() {
    assert!(linspace(0.0f32, 1.0, 0).is_empty());
    assert_eq!(linspace(2.0f32, 5.0, 1), vec![2.0]);
    assert_eq!(linspace(-1.0f64, 1.0, 3), vec![-1.0, 0.0, 1.0]);
  }

  #[test]
  fn split_sizes() {
    let data: Dataset<f32> = Dataset::linear(&DataConfig::default());
    let split = data.split(0.8).unwrap();
    assert_eq!(split.train.len(), 80);
    assert_eq!(split.test.len(), 20);
  }

  #[test]
  fn split_preserves_order() {
    let data: Dataset<f64> = Dataset::linear(&DataConfig::default());
    let split = data.split(0.8).unwrap();
    let x: Vec<f64> = [split.train.x(), split.test.x()].concat();
    let y: Vec<f64> = [split.train.y(), split.test.y()].concat();
    assert_eq!(Dataset::new(x, y), data);
  }

  #[test]
  fn split_extremes() {
    let data: Dataset<f64> = Dataset::linear(&DataConfig { num_points: 7, ..Default::default() });
    assert_eq!(data.split(0.0).unwrap().train.len(), 0);
    assert_eq!(data.split(1.0).unwrap().test.len(), 0);
    assert_eq!(data.split(0.5).unwrap().train.len(), 3);
    assert!(data.split(1.5).is_err());
    assert!(data.split(f64::NAN).is_err());
  }
}
