//! Client session: the shared binding table, the listing, and push handling.
//!
//! A [`Session`] is created once at startup and owns the state that the UI
//! and the transport share. Components receive `Arc` handles from it instead
//! of reaching for globals.

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::{ClientError, ClientResult};
use crate::input::{Action, BindingTable, InputCode, InputDispatcher};
use crate::models::ListingModel;
use crate::startup::{ClientConfig, DecodeFailurePolicy};
use crate::storage;
use crate::traits::StructuredData;

/// A server push, already framed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerPush {
    /// Encoded listing snapshot body
    Listing(Bytes),
    /// The server's listing changed; drop what we have
    InvalidateListing,
}

/// Applies one push to the listing.
///
/// On decode failure the listing is left alone or emptied according to
/// `policy`, and the error is returned either way.
pub fn apply_push(
    listing: &ListingModel,
    policy: DecodeFailurePolicy,
    push: ServerPush,
) -> ClientResult<()> {
    match push {
        ServerPush::Listing(body) => listing
            .apply_encoded(&body)
            .map_err(ClientError::from)
            .inspect_err(|e| {
                warn!(
                    error = %e,
                    code = e.error_code(),
                    category = %e.category(),
                    bytes = body.len(),
                    policy = %policy,
                    "Listing update rejected"
                );
                if policy == DecodeFailurePolicy::Reset {
                    listing.reset();
                }
            }),
        ServerPush::InvalidateListing => {
            listing.reset();
            Ok(())
        }
    }
}

/// Spawn a task that applies pushes in arrival order until `rx` closes.
pub fn spawn_push_handler(
    listing: Arc<ListingModel>,
    policy: DecodeFailurePolicy,
    mut rx: mpsc::Receiver<ServerPush>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(push) = rx.recv().await {
            // Failures are logged in apply_push; keep serving later pushes.
            let _ = apply_push(&listing, policy, push);
        }
        info!("Push channel closed, listing handler stopped");
    })
}

/// State shared by the UI and the transport for one client run.
#[derive(Debug, Clone)]
pub struct Session {
    config: ClientConfig,
    bindings: Arc<BindingTable>,
    listing: Arc<ListingModel>,
}

impl Session {
    /// Creates a session with default key bindings and an empty listing.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            bindings: Arc::new(BindingTable::new()),
            listing: Arc::new(ListingModel::new()),
        }
    }

    /// Creates a session and loads the persisted key configuration, if any.
    ///
    /// A missing, unreadable or invalid file leaves the defaults in place.
    pub fn start(config: ClientConfig) -> Self {
        let keys = config
            .key_config_path()
            .and_then(|path| match storage::load_key_config(&path) {
                Ok(Some(keys)) => {
                    info!(path = %path.display(), "Loaded key configuration");
                    Some(keys)
                }
                Ok(None) => None,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Bad key configuration, using defaults");
                    None
                }
            });

        let mut session = Self::new(config);
        if let Some(keys) = keys {
            session.bindings = Arc::new(BindingTable::with_config(keys));
        }
        session
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn bindings(&self) -> &Arc<BindingTable> {
        &self.bindings
    }

    pub fn listing(&self) -> &Arc<ListingModel> {
        &self.listing
    }

    /// A dispatcher reading this session's bindings.
    pub fn dispatcher(&self) -> InputDispatcher {
        InputDispatcher::new(Arc::clone(&self.bindings))
    }

    /// Binds `code` to `action`, or moves it there when `steal` is set.
    ///
    /// Returns the action that lost the key. Without `steal`, a key held by
    /// another action is a conflict and nothing changes.
    pub fn bind_key(
        &self,
        action: Action,
        code: InputCode,
        steal: bool,
    ) -> ClientResult<Option<Action>> {
        if steal {
            return Ok(self.bindings.reassign(action, code));
        }
        self.bindings.bind(action, code)?;
        Ok(None)
    }

    /// Persists the current key configuration.
    ///
    /// Returns `Ok(false)` when persistence is disabled.
    pub fn save_keys(&self) -> color_eyre::Result<bool> {
        let Some(path) = self.config.key_config_path() else {
            return Ok(false);
        };
        storage::save_key_config(&path, &self.bindings.configuration())?;
        info!(path = %path.display(), "Saved key configuration");
        Ok(true)
    }

    /// Applies one push using the configured failure policy.
    pub fn handle_push(&self, push: ServerPush) -> ClientResult<()> {
        apply_push(&self.listing, self.config.decode_failure, push)
    }

    /// Spawns the push handler for this session's listing.
    pub fn spawn_push_handler(&self, rx: mpsc::Receiver<ServerPush>) -> JoinHandle<()> {
        spawn_push_handler(Arc::clone(&self.listing), self.config.decode_failure, rx)
    }
}
