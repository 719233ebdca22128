//! Gradient descent fitting of straight lines.
//! Tiny. Few dependencies. CPU only.
//!
//! # Features
//!
//! - **Synthetic data** — Noiseless samples of `y = weight * x + bias` over an
//! evenly spaced interval, split contiguously into train and test portions.
//!
//! - **Closed-form gradients** — The model has just two scalars, so gradients
//! of the loss are derived by hand instead of traced through a graph.
//!
//! - **Generic precision** — Everything runs on any [scalar::Real], which in
//! practice means [f32] or [f64].
//!
//! - **Reproducible** — Parameter initialization can be seeded, giving
//! bit-identical runs.
//!
//! - **Persistence** — Trained parameters round-trip through a compact,
//! headerless binary file.
//!
//! # Examples
//!
//! Fitting a line and saving the result:
//! ```
//! use microfit::{ Dataset, DataConfig, LinearModel, Trainer, TrainConfig };
//!
//! fn main() -> microfit::Result<()> {
//!   // y = 0.3x + 0.9, 100 points over [0, 1]
//!   let data: Dataset<f32> = Dataset::linear(&DataConfig::default());
//!   let split = data.split(0.8)?;
//!
//!   // Both parameters start out standard normal
//!   let mut model = LinearModel::seeded(1234);
//!
//!   // 300 epochs of SGD, evaluating every 20 epochs
//!   let trainer = Trainer::new(TrainConfig::default());
//!   for report in trainer.fit(&mut model, &split) {
//!     println!("{report}");
//!   }
//!
//!   // Round trip through the filesystem
//!   let path = std::env::temp_dir().join("microfit_doc_model.bin");
//!   model.save(&path)?;
//!   assert_eq!(LinearModel::load(&path)?, model);
//!   Ok(())
//! }
//! ```
//!
//! Running the whole thing at once:
//! ```no_run
//! use microfit::{ Config, Workflow };
//!
//! let workflow = Workflow::new(Config::default()).unwrap();
//! let outcome = workflow.run_with::<f32, _>(|report| println!("{report}") ).unwrap();
//! println!("{:?}", outcome.reloaded_matches);
//! ```
//!
//! ## More examples
//! Check the `/demos` folder for runnable programs.

mod internal;
mod error;
mod persist;

pub mod scalar;
pub mod data;
pub mod model;
pub mod loss;
pub mod optimize;
pub mod train;
pub mod config;
pub mod workflow;

pub use error::{ Error, Result };
pub use internal::all_close;
pub use data::{ Dataset, DataConfig, Split };
pub use model::{ LinearModel, StateDict, Gradient };
pub use train::{ Trainer, TrainConfig, Report };
pub use config::Config;
pub use workflow::{ Workflow, Outcome };
