use log::{ debug, info };
use serde::{ Serialize, Deserialize };

use crate::{
  data::{ Dataset, Split },
  loss::{ Loss, MeanAbsoluteError },
  model::LinearModel,
  optimize::{ Optimizer, SGD },
  scalar::{ Real, lit },
};


/// Fixed schedule of a training run.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
  pub learning_rate: f64,
  pub epochs: usize,
  /// Evaluate on the test split every this many epochs. Zero disables evaluation.
  pub eval_interval: usize,
}

impl Default for TrainConfig {
  fn default() -> Self {
    Self {
      learning_rate: 0.01,
      epochs: 300,
      eval_interval: 20,
    }
  }
}


/// Losses observed at an evaluation epoch.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report<R: Real> {
  /// One-based epoch number.
  pub epoch: usize,
  pub train_loss: R,
  pub test_loss: R,
}

impl<R: Real> std::fmt::Display for Report<R> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Epoch {}: Train loss {:.4} | Test loss {:.4}", self.epoch, self.train_loss, self.test_loss)
  }
}


/// Full-batch gradient descent over a [Split], evaluating
/// on the test portion at a fixed interval.

#[derive(Debug, Clone)]
pub struct Trainer<L = MeanAbsoluteError> {
  pub config: TrainConfig,
  loss: L,
}

impl Trainer {
  pub fn new(config: TrainConfig) -> Self {
    Self::with_loss(config, MeanAbsoluteError)
  }
}

impl Default for Trainer {
  fn default() -> Self {
    Self::new(TrainConfig::default())
  }
}

impl<L> Trainer<L> {
  pub fn with_loss(config: TrainConfig, loss: L) -> Self {
    Self { config, loss }
  }

  /// Whether the given one-based epoch gets evaluated.

  pub fn evaluates(&self, epoch: usize) -> bool {
    self.config.eval_interval != 0 && epoch % self.config.eval_interval == 0
  }

  pub fn fit<R: Real>(&self, model: &mut LinearModel<R>, split: &Split<R>) -> Vec<Report<R>>
  where
    L: Loss<R>,
  {
    self.fit_with(model, split, |_| {})
  }

  /// Train for exactly `epochs` epochs, handing every report
  /// to `on_report` as soon as it is produced.

  pub fn fit_with<R, F>(&self, model: &mut LinearModel<R>, split: &Split<R>, mut on_report: F) -> Vec<Report<R>>
  where
    R: Real,
    L: Loss<R>,
    F: FnMut(&Report<R>),
  {
    let mut optimizer = Optimizer::new(lit(self.config.learning_rate), SGD);
    let mut reports = vec![];
    for epoch in 1..=self.config.epochs {
      let train_loss = self.train_step(model, &mut optimizer, &split.train);
      debug!("Epoch {epoch}: train loss {train_loss}");
      if self.evaluates(epoch) {
        let report = Report {
          epoch,
          train_loss,
          test_loss: self.evaluate(model, &split.test),
        };
        info!("{report}");
        on_report(&report);
        reports.push(report);
      }
    }
    reports
  }

  /// One full-batch update. Returns the loss before the update.

  pub fn train_step<R: Real>(&self, model: &mut LinearModel<R>, optimizer: &mut Optimizer<R, SGD>, data: &Dataset<R>) -> R
  where
    L: Loss<R>,
  {
    let prediction = model.predict(data.x());
    let loss = self.loss.compute(&prediction, data.y());
    let grad = model.backward(data.x(), &self.loss.derive(&prediction, data.y()));
    optimizer.minimize(model, &grad);
    loss
  }

  /// Loss of the current parameters on `data`, without touching them.

  pub fn evaluate<R: Real>(&self, model: &LinearModel<R>, data: &Dataset<R>) -> R
  where
    L: Loss<R>,
  {
    self.loss.compute(&model.predict(data.x()), data.y())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::DataConfig;

  fn trainer() -> Trainer {
    Trainer::new(TrainConfig::default())
  }

  fn split<R: Real>() -> Split<R> {
    Dataset::linear(&DataConfig::default()).split(0.8).unwrap()
  }

  #[test]
  fn evaluation_cadence() {
    let mut model = LinearModel::<f32>::seeded(1234);
    let reports = trainer().fit(&mut model, &split());
    let epochs: Vec<usize> = reports.iter().map(|r| r.epoch ).collect();
    assert_eq!(epochs, (1..=15).map(|i| i * 20 ).collect::<Vec<_>>());
  }

  #[test]
  fn callback_sees_every_report() {
    let mut model = LinearModel::<f64>::seeded(5);
    let mut seen = vec![];
    let reports = trainer().fit_with(&mut model, &split(), |r| seen.push(*r) );
    assert_eq!(seen, reports);
  }

  #[test]
  fn reproducible_under_seed() {
    let data = split::<f32>();
    let mut a = LinearModel::seeded(42);
    let mut b = LinearModel::seeded(42);
    let ra = trainer().fit(&mut a, &data);
    let rb = trainer().fit(&mut b, &data);
    assert_eq!(a, b);
    assert_eq!(ra, rb);
  }

  #[test]
  fn learns_the_line() {
    let mut model = LinearModel::<f64>::new(0.0, 0.0);
    let reports = trainer().fit(&mut model, &split());
    assert!(reports.last().unwrap().train_loss < reports[0].train_loss);
    assert!((model.slope() - 0.3).abs() < 0.05, "slope {}", model.slope());
    assert!((model.intercept() - 0.9).abs() < 0.05, "intercept {}", model.intercept());
  }

  #[test]
  fn learns_the_line_in_single_precision() {
    let mut model = LinearModel::<f32>::new(0.0, 0.0);
    trainer().fit(&mut model, &split());
    assert!((model.slope() - 0.3).abs() < 0.05);
    assert!((model.intercept() - 0.9).abs() < 0.05);
  }

  #[test]
  fn first_step_moves_by_learning_rate() {
    // All predictions undershoot, so every sign is -1
    let data = split::<f64>();
    let trainer = trainer();
    let mut model = LinearModel::new(0.0, 0.0);
    let mut optimizer = Optimizer::new(0.01, SGD);
    let loss = trainer.train_step(&mut model, &mut optimizer, &data.train);
    let mean_x = data.train.x().iter().sum::<f64>() / 80.0;
    assert!((loss - data.train.y().iter().sum::<f64>() / 80.0).abs() < 1e-12);
    assert!((model.intercept() - 0.01).abs() < 1e-12);
    assert!((model.slope() - 0.01 * mean_x).abs() < 1e-12);
  }

  #[test]
  fn evaluation_does_not_mutate() {
    let data = split::<f64>();
    let model = LinearModel::new(0.1, 0.2);
    let before = model;
    let loss = trainer().evaluate(&model, &data.test);
    assert!(loss > 0.0);
    assert_eq!(model, before);
  }

  #[test]
  fn schedule_edges() {
    let data = split::<f64>();
    let mut model = LinearModel::new(0.0, 0.0);
    let silent = Trainer::new(TrainConfig { eval_interval: 0, ..Default::default() });
    assert!(silent.fit(&mut model, &data).is_empty());
    assert_ne!(model, LinearModel::new(0.0, 0.0));

    let mut untouched = LinearModel::new(0.0, 0.0);
    let idle = Trainer::new(TrainConfig { epochs: 0, ..Default::default() });
    assert!(idle.fit(&mut untouched, &data).is_empty());
    assert_eq!(untouched, LinearModel::new(0.0, 0.0));
  }

  #[test]
  fn report_format() {
    let report = Report { epoch: 20, train_loss: 0.123456f32, test_loss: 1.0 };
    assert_eq!(report.to_string(), "Epoch 20: Train loss 0.1235 | Test loss 1.0000");
  }
}
