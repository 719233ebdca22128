use log::{ debug, info, warn };
use serde::{ Serialize, de::DeserializeOwned };

use crate::{
  config::Config,
  data::Dataset,
  error::Result,
  internal::all_close,
  model::LinearModel,
  scalar::{ Real, lit },
  train::{ Report, Trainer },
};


/// Result of a complete [Workflow] run.

#[derive(Debug, Clone)]
pub struct Outcome<R: Real> {
  pub reports: Vec<Report<R>>,
  pub model: LinearModel<R>,
  /// Predictions of the trained model on the test split.
  pub predictions: Vec<R>,
  /// Whether a model reloaded from disk predicted the same values.
  /// `None` when no model path was configured.
  pub reloaded_matches: Option<bool>,
}


/// Generate data, split it, fit a fresh model and optionally
/// check that its parameters survive a trip through the filesystem.

#[derive(Debug, Clone, Default)]
pub struct Workflow {
  pub config: Config,
}

impl Workflow {
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn run<R>(&self) -> Result<Outcome<R>>
  where
    R: Real + Serialize + DeserializeOwned,
  {
    self.run_with(|_| {})
  }

  /// Like [run](Self::run), handing each evaluation report to `on_report`.

  pub fn run_with<R, F>(&self, on_report: F) -> Result<Outcome<R>>
  where
    R: Real + Serialize + DeserializeOwned,
    F: FnMut(&Report<R>),
  {
    let config = &self.config;
    let data: Dataset<R> = Dataset::linear(&config.data);
    let split = data.split(config.train_fraction)?;
    debug!("Split {} points into {} train and {} test", data.len(), split.train.len(), split.test.len());

    let mut model = match config.seed {
      Some(seed) => LinearModel::seeded(seed),
      None => LinearModel::randn(&mut rand::thread_rng()),
    };
    info!("Initial model state {}", model.state_dict());

    let reports = Trainer::new(config.training.clone()).fit_with(&mut model, &split, on_report);
    info!("Trained model state {}", model.state_dict());

    let predictions = model.predict(split.test.x());

    let reloaded_matches = match &config.model_path {
      Some(path) => {
        model.save(path)?;
        let loaded = LinearModel::load(path)?;
        let matches = all_close(&loaded.predict(split.test.x()), &predictions, lit(1e-5), lit(1e-8));
        if matches {
          info!("Reloaded model reproduces all {} test predictions", predictions.len());
        } else {
          warn!("Reloaded model diverges from the trained model");
        }
        Some(matches)
      },
      None => None,
    };

    Ok(Outcome { reports, model, predictions, reloaded_matches })
  }
}
