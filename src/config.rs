use std::fs;
use std::path::{ Path, PathBuf };

use serde::{ Serialize, Deserialize };

use crate::{
  data::DataConfig,
  error::{ Error, Result },
  train::TrainConfig,
};


/// Everything a [Workflow](crate::Workflow) run depends on.
///
/// The default reproduces the classic straight line exercise:
/// 100 points of `y = 0.3x + 0.9` over `[0, 1]`, an 80/20 split,
/// 300 epochs of SGD at a learning rate of 0.01 with a test
/// evaluation every 20 epochs.
///
/// Missing fields in a JSON document fall back to these defaults:
/// ```
/// let config = microfit::Config::from_json(r#"{ "training": { "epochs": 50 } }"#).unwrap();
/// assert_eq!(config.training.epochs, 50);
/// assert_eq!(config.training.eval_interval, 20);
/// assert_eq!(config.data.num_points, 100);
/// ```

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Seed for parameter initialization. `None` seeds from entropy.
  pub seed: Option<u64>,
  pub train_fraction: f64,
  pub data: DataConfig,
  pub training: TrainConfig,
  /// Where to persist the trained parameters. `None` skips the save/load check.
  pub model_path: Option<PathBuf>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      seed: Some(1234),
      train_fraction: 0.8,
      data: DataConfig::default(),
      training: TrainConfig::default(),
      model_path: Some(PathBuf::from("workflow_model.bin")),
    }
  }
}

impl Config {
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    Self::from_json(&fs::read_to_string(path)?)
  }

  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.train_fraction) {
      return Err(invalid(format!("train_fraction {} is outside [0, 1]", self.train_fraction)))
    }
    let rate = self.training.learning_rate;
    if !rate.is_finite() || rate <= 0.0 {
      return Err(invalid(format!("learning_rate {rate} must be positive")))
    }
    let DataConfig { start, end, weight, bias, .. } = self.data;
    if ![start, end, weight, bias].iter().all(|v| v.is_finite() ) {
      return Err(invalid("data parameters must be finite".to_string()))
    }
    if end < start {
      return Err(invalid(format!("data interval [{start}, {end}] is reversed")))
    }
    Ok(())
  }
}

fn invalid(message: String) -> Error {
  Error::InvalidConfig(message)
}
