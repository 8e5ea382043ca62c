/*!
Edit dispatch: wraps edit intents in outbound messages and posts them to the
host frame. Fire-and-forget; failures are logged, never retried.
*/

use async_broadcast::{InactiveReceiver, Receiver, Sender, TrySendError};

use crate::platform::Host;
use crate::types::{EditIntent, Location, OutboundMessage, TailorError, TailorResult};

const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Posts edit and locate messages through a [`Host`].
#[derive(Debug)]
pub struct Dispatcher<H> {
  host: H,
}

impl<H: Host> Dispatcher<H> {
  /// Dispatch through `host`.
  pub const fn new(host: H) -> Self {
    Self { host }
  }

  /// The host messages go to.
  pub const fn host(&self) -> &H {
    &self.host
  }

  /// Post an `api_call` carrying `edit` and the current page URL.
  pub fn edit(&self, edit: EditIntent) {
    log::info!("Dispatching edit: {}", edit.action());
    let message = OutboundMessage::api_call(self.host.page_url(), edit);
    self.post(&message);
  }

  /// Post a `locate` notification.
  pub fn locate(&self, location: Location) {
    log::debug!("Locating {}", location.anchor());
    self.post(&OutboundMessage::Locate { location });
  }

  fn post(&self, message: &OutboundMessage) {
    if let Err(e) = self.host.post(message) {
      log::warn!("Failed to post message: {e}");
    }
  }
}

/// In-process host: broadcasts every posted message to subscribers.
///
/// Used by tests and by embedders that forward messages themselves.
#[derive(Clone)]
pub struct ChannelHost {
  page_url: String,
  tx: Sender<OutboundMessage>,
  keepalive: InactiveReceiver<OutboundMessage>,
}

impl std::fmt::Debug for ChannelHost {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ChannelHost")
      .field("page_url", &self.page_url)
      .finish_non_exhaustive()
  }
}

impl ChannelHost {
  /// A host reporting `page_url` with no subscribers yet.
  pub fn new(page_url: impl Into<String>) -> Self {
    let (mut tx, rx) = async_broadcast::broadcast(MESSAGE_CHANNEL_CAPACITY);
    tx.set_overflow(true); // Drop oldest messages when full
    Self {
      page_url: page_url.into(),
      tx,
      keepalive: rx.deactivate(),
    }
  }

  /// Receive messages posted from now on.
  pub fn subscribe(&self) -> Receiver<OutboundMessage> {
    self.keepalive.activate_cloned()
  }
}

impl Host for ChannelHost {
  fn page_url(&self) -> String {
    self.page_url.clone()
  }

  fn post(&self, message: &OutboundMessage) -> TailorResult<()> {
    match self.tx.try_broadcast(message.clone()) {
      Ok(_) | Err(TrySendError::Inactive(_)) => Ok(()),
      Err(TrySendError::Full(_)) => Err(TailorError::Host("message channel full".to_string())),
      Err(TrySendError::Closed(_)) => Err(TailorError::Host("message channel closed".to_string())),
    }
  }
}
