//! Serialized access to a shared forecast model

use crate::error::{ForecastError, Result};
use crate::models::{ForecastModel, ForecastResult};
use crate::period::Period;
use std::sync::{Arc, Mutex};

/// Wraps a model so concurrent callers take turns calling `forecast`
///
/// Clones share the same underlying model.
#[derive(Debug)]
pub struct SynchronizedModel<M> {
    inner: Arc<Mutex<M>>,
    name: String,
    anchor: Option<Period>,
}

impl<M: ForecastModel> SynchronizedModel<M> {
    /// Take ownership of a model
    pub fn new(model: M) -> Self {
        let name = model.name().to_string();
        let anchor = model.anchor();
        Self {
            inner: Arc::new(Mutex::new(model)),
            name,
            anchor,
        }
    }
}

impl<M> Clone for SynchronizedModel<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            name: self.name.clone(),
            anchor: self.anchor,
        }
    }
}

impl<M: ForecastModel> ForecastModel for SynchronizedModel<M> {
    fn forecast(&self, steps: usize) -> Result<ForecastResult> {
        let model = self
            .inner
            .lock()
            .map_err(|_| ForecastError::ForecastFailed("model lock poisoned".to_string()))?;
        model.forecast(steps)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn anchor(&self) -> Option<Period> {
        self.anchor
    }
}
