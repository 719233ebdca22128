// This example trains a model, saves its parameters to a file,
// loads them into a fresh model and confirms that both
// models make the same predictions on the test data.

use microfit::{ Config, Workflow };

fn main() -> microfit::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  // Seeded run, saving to workflow_model.bin
  let workflow = Workflow::new(Config::default())?;
  let outcome = workflow.run_with::<f32, _>(|report| println!("{report}") )?;

  // Compare predictions
  println!("{}", outcome.reloaded_matches.unwrap_or(false));
  Ok(())
}
