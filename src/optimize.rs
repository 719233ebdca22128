use crate::{
  scalar::Real,
  model::{ LinearModel, Gradient },
};


/// An optimization strategy to be used with [Optimizer].

pub trait Strategy<R: Real> {
  fn update(&mut self, grad: &Gradient<R>, rate: R, step: usize) -> Gradient<R>;
}


/// Generic optimizer that allows for several optimization [strategies](Strategy) to be used.

#[derive(Debug)]
pub struct Optimizer<R: Real, S: Strategy<R>> {
  strategy: S,
  pub learning_rate: R,
  step: usize,
}

impl<R: Real, S: Strategy<R>> Optimizer<R, S> {
  pub fn new(learning_rate: R, strategy: S) -> Self {
    Self { strategy, learning_rate, step: 1 }
  }

  /// Number of the next step, starting at one.

  pub fn step(&self) -> usize {
    self.step
  }

  pub fn minimize(&mut self, model: &mut LinearModel<R>, grad: &Gradient<R>) {
    // Execute strategy
    let change = self.strategy.update(grad, self.learning_rate, self.step);

    // Apply change
    model.apply(&change);

    self.step += 1;
  }
}


/// Stochastic Gradient Descent strategy

#[derive(Debug, Clone, Default)]
pub struct SGD;

impl<R: Real> Strategy<R> for SGD {
  fn update(&mut self, grad: &Gradient<R>, rate: R, _step: usize) -> Gradient<R> {
    grad.scale(-rate)
  }
}
