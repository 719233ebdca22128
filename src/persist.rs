use std::fs;
use std::path::Path;

use log::info;
use serde::{ Serialize, de::DeserializeOwned };

use crate::{
  error::{ Error, Result },
  model::{ LinearModel, StateDict },
  scalar::Real,
};


impl<R: Real + Serialize + DeserializeOwned> StateDict<R> {
  /// Encode both parameters, slope first, with no header.

  pub fn to_bytes(&self) -> Result<Vec<u8>> {
    Ok(postcard::to_allocvec(self)?)
  }

  /// Decode parameters written by [to_bytes](Self::to_bytes),
  /// rejecting anything that isn't exactly two finite scalars.

  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let (state, rest): (Self, _) = postcard::take_from_bytes(bytes)?;
    if !rest.is_empty() {
      return Err(Error::TrailingBytes { count: rest.len() })
    }
    if !state.slope.is_finite() { return Err(Error::NonFinite { name: "slope" }) }
    if !state.intercept.is_finite() { return Err(Error::NonFinite { name: "intercept" }) }
    Ok(state)
  }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, self.to_bytes()?)?;
    info!("Saved model state {} to {}", self, path.display());
    Ok(())
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let state = Self::from_bytes(&fs::read(path)?)?;
    info!("Loaded model state {} from {}", state, path.display());
    Ok(state)
  }
}

impl<R: Real + Serialize + DeserializeOwned> LinearModel<R> {
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.state_dict().save(path)
  }

  /// Fresh model carrying the parameters stored at `path`.

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    Ok(Self::from_state_dict(&StateDict::load(path)?))
  }
}
