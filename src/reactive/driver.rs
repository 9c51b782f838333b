//! Replay-latest output streams.
//!
//! A [`Publisher`] is the write side held by a composition, a [`Driver`] is the read side handed
//! out to consumers. Both share one [`watch`] channel, so consumers always observe the most recent
//! emission and never see the stream terminate.

use std::sync::Arc;
#[cfg(test)]
use std::time::Duration;

use futures::Stream;
use tokio::sync::watch;
#[cfg(test)]
use tokio::time::timeout;

use crate::reactive::activation::Activation;
#[cfg(test)]
use crate::reactive::driver_error::DriverError;

/// Write side of a [`Driver`].
pub(crate) struct Publisher<T> {
  sender: Arc<watch::Sender<Option<T>>>,
}

impl<T> Clone for Publisher<T> {
  fn clone(&self) -> Self {
    Publisher {
      sender: self.sender.clone(),
    }
  }
}

impl<T: Clone + Send + Sync + 'static> Publisher<T> {
  /// Constructs a publisher with no value yet.
  pub(crate) fn new() -> Self {
    Publisher {
      sender: Arc::new(watch::Sender::new(None)),
    }
  }

  /// Constructs a publisher whose initial value is replayed to subscribers before any emission.
  pub(crate) fn with_initial(initial: T) -> Self {
    Publisher {
      sender: Arc::new(watch::Sender::new(Some(initial))),
    }
  }

  /// Pushes a value to all current subscribers and stores it for future ones.
  ///
  /// Subscribers are notified even if the value equals the previous one.
  pub(crate) fn emit(&self, value: T) {
    self.sender.send_replace(Some(value));
  }

  /// Creates the read side, bound to the composition that feeds this publisher.
  pub(crate) fn driver(&self, activation: &Arc<Activation>) -> Driver<T> {
    Driver {
      sender: self.sender.clone(),
      activation: activation.clone(),
    }
  }
}

/// A hot, lazily activated output stream that replays its latest value.
///
/// Subscribing activates the composition behind the driver. Any number of subscribers may exist,
/// and each one starts from the latest value. Subscribing again never restarts the composition.
pub(crate) struct Driver<T> {
  sender: Arc<watch::Sender<Option<T>>>,
  activation: Arc<Activation>,
}

impl<T> Clone for Driver<T> {
  fn clone(&self) -> Self {
    Driver {
      sender: self.sender.clone(),
      activation: self.activation.clone(),
    }
  }
}

impl<T: Clone + Send + Sync + 'static> Driver<T> {
  /// Subscribes, receiving the latest value (if any) first.
  pub(crate) fn subscribe(&self) -> DriverReceiver<T> {
    let mut receiver = self.subscribe_changes();
    if receiver.receiver.borrow().is_some() {
      receiver.receiver.mark_changed();
    }
    receiver
  }

  /// Subscribes, receiving only values emitted from now on.
  pub(crate) fn subscribe_changes(&self) -> DriverReceiver<T> {
    self.activation.activate();
    DriverReceiver {
      receiver: self.sender.subscribe(),
      _sender: self.sender.clone(),
      _activation: self.activation.clone(),
    }
  }

  /// Returns the latest emitted value without subscribing.
  pub(crate) fn latest(&self) -> Option<T> {
    self.sender.borrow().clone()
  }
}

/// Blocking-style helpers for tests, which await an emission with a timeout.
#[cfg(test)]
impl<T: Clone + Send + Sync + 'static> Driver<T> {
  /// Awaits the first value available to a new subscriber.
  ///
  /// Resolves immediately when a value has already been emitted.
  pub(crate) async fn first(&self, duration: Duration) -> Result<T, DriverError> {
    self.wait_for(|_| true, duration).await
  }

  /// Awaits the first value, latest included, that satisfies `predicate`.
  ///
  /// # Errors
  ///
  /// - [`DriverError::Timeout`]: no such value was emitted within `duration`.
  pub(crate) async fn wait_for(
    &self,
    predicate: impl Fn(&T) -> bool,
    duration: Duration,
  ) -> Result<T, DriverError> {
    let mut subscription = self.subscribe();
    let result = timeout(
      duration,
      subscription
        .receiver
        .wait_for(|value| value.as_ref().is_some_and(&predicate)),
    )
    .await;
    match result {
      Ok(Ok(value)) => (*value).clone().ok_or(DriverError::Timeout),
      _ => Err(DriverError::Timeout),
    }
  }
}

/// A single subscription to a [`Driver`].
///
/// Keeps the composition alive while held.
pub(crate) struct DriverReceiver<T> {
  receiver: watch::Receiver<Option<T>>,
  _sender: Arc<watch::Sender<Option<T>>>,
  _activation: Arc<Activation>,
}

impl<T: Clone + Send + Sync + 'static> DriverReceiver<T> {
  /// Awaits the next emission.
  ///
  /// Emissions made faster than they are received collapse into the latest one. Returns [`None`]
  /// only if the channel is gone, which cannot happen while this receiver exists.
  pub(crate) async fn next(&mut self) -> Option<T> {
    loop {
      self.receiver.changed().await.ok()?;
      let value = (*self.receiver.borrow_and_update()).clone();
      if value.is_some() {
        return value;
      }
    }
  }

  pub(crate) fn into_stream(self) -> impl Stream<Item = T> + Send {
    futures::stream::unfold(self, |mut receiver| async move {
      receiver.next().await.map(|value| (value, receiver))
    })
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;
  use std::time::Duration;

  use futures::StreamExt;
  use tokio::time::timeout;

  use crate::reactive::activation::Activation;
  use crate::reactive::driver::Publisher;
  use crate::reactive::driver_error::DriverError;

  const WAIT: Duration = Duration::from_millis(200);

  #[tokio::test]
  async fn replays_latest_to_late_subscriber_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::new();
    let driver = publisher.driver(&activation);
    publisher.emit(1);
    publisher.emit(2);

    let mut first = driver.subscribe();
    let mut second = driver.subscribe();
    assert_eq!(Some(2), timeout(WAIT, first.next()).await.unwrap());
    assert_eq!(Some(2), timeout(WAIT, second.next()).await.unwrap());
  }

  #[tokio::test]
  async fn initial_value_is_replayed_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::with_initial(false);
    let driver = publisher.driver(&activation);
    assert_eq!(Ok(false), driver.first(WAIT).await);
  }

  #[tokio::test]
  async fn changes_skip_latest_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::with_initial("old");
    let driver = publisher.driver(&activation);
    let mut changes = driver.subscribe_changes();
    assert!(timeout(Duration::from_millis(20), changes.next()).await.is_err());

    publisher.emit("new");
    assert_eq!(Some("new"), timeout(WAIT, changes.next()).await.unwrap());
  }

  #[tokio::test]
  async fn equal_values_still_notify_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::new();
    let driver = publisher.driver(&activation);
    let mut changes = driver.subscribe_changes();

    publisher.emit(());
    assert_eq!(Some(()), timeout(WAIT, changes.next()).await.unwrap());
    publisher.emit(());
    assert_eq!(Some(()), timeout(WAIT, changes.next()).await.unwrap());
  }

  #[tokio::test]
  async fn first_times_out_without_value_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::<u8>::new();
    let driver = publisher.driver(&activation);
    assert_eq!(
      Err(DriverError::Timeout),
      driver.first(Duration::from_millis(20)).await
    );
    assert!(driver.latest().is_none());
  }

  #[tokio::test]
  async fn wait_for_matching_value_test() {
    let activation = Arc::new(Activation::new(async {}));
    let publisher = Publisher::with_initial(0);
    let driver = publisher.driver(&activation);

    let waiter = tokio::spawn({
      let driver = driver.clone();
      async move { driver.wait_for(|value| *value > 1, WAIT).await }
    });
    publisher.emit(1);
    tokio::task::yield_now().await;
    publisher.emit(2);

    assert_eq!(Ok(2), waiter.await.unwrap());
  }

  #[tokio::test]
  async fn subscribe_activates_composition_test() {
    let activation = Arc::new(Activation::new(futures::future::pending()));
    let publisher = Publisher::<u8>::new();
    let driver = publisher.driver(&activation);
    assert!(!activation.is_active());

    let stream = driver.subscribe().into_stream();
    assert!(activation.is_active());

    publisher.emit(7);
    let values: Vec<u8> = timeout(WAIT, stream.take(1).collect()).await.unwrap();
    assert_eq!(vec![7], values);
  }
}
