//! Deferred start of a composition task.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::BoxFuture;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Holds a composition until something subscribes to one of its outputs.
///
/// The composition is spawned as a [`tokio::task`] on the first call to [`activate`], every later
/// call is a no-op. Dropping the activation aborts the task, so the composition lives exactly as
/// long as some output handle or subscriber references it.
///
/// [`activate`]: Activation::activate
pub(crate) struct Activation {
  pipeline: Mutex<Option<BoxFuture<'static, ()>>>,
  task: Mutex<Option<JoinHandle<()>>>,
}

impl Activation {
  pub(crate) fn new(pipeline: impl Future<Output = ()> + Send + 'static) -> Self {
    Activation {
      pipeline: Mutex::new(Some(Box::pin(pipeline))),
      task: Mutex::new(None),
    }
  }

  /// Starts the composition if it has not been started yet.
  ///
  /// Must be called from within a tokio runtime. Outside of one the composition stays pending and
  /// the next subscription retries.
  pub(crate) fn activate(&self) {
    let mut pipeline = lock(&self.pipeline);
    let Some(future) = pipeline.take() else {
      return;
    };
    match Handle::try_current() {
      Ok(handle) => {
        debug!("Activating composition.");
        lock(&self.task).replace(handle.spawn(future));
      }
      Err(e) => {
        warn!("Cannot activate composition outside of a runtime! {e}");
        pipeline.replace(future);
      }
    }
  }

  #[cfg(test)]
  pub(crate) fn is_active(&self) -> bool {
    lock(&self.task).is_some()
  }
}

impl Drop for Activation {
  fn drop(&mut self) {
    let task = self.task.get_mut().unwrap_or_else(PoisonError::into_inner);
    if let Some(task) = task.take() {
      debug!("Composition released, aborting.");
      task.abort();
    }
  }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
  mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
