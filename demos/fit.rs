// This example fits a straight line to synthetic data with plain
// gradient descent, reporting train and test loss every 20 epochs.

use microfit::{ Dataset, DataConfig, LinearModel, Trainer, TrainConfig };

fn main() -> microfit::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  // Sample y = 0.3x + 0.9 and hold out the last 20 percent
  let data: Dataset<f32> = Dataset::linear(&DataConfig::default());
  let split = data.split(0.8)?;

  // Start from random parameters
  let mut model = LinearModel::randn(&mut rand::thread_rng());
  println!("{}", model.state_dict());

  // Print reports as they come in
  let trainer = Trainer::new(TrainConfig::default());
  trainer.fit_with(&mut model, &split, |report| println!("{report}") );

  println!("{}", model.state_dict());
  Ok(())
}
