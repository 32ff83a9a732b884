#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

//! Client-side access layer for the `/user` and `/role` resources.
//!
//! [`UserAccess`] keeps a cached snapshot of both collections, refreshes the
//! user list after every successful mutation and reports outcomes through an
//! injected [`Notifier`].

pub mod access;
pub mod config;
pub mod error;
pub mod notifier;
pub mod transport;

pub use crate::access::UserAccess;
pub use crate::config::{AccessConfig, ParsePolicyError, PartialDeletePolicy, RefreshMode};
pub use crate::error::ClientError;
pub use crate::notifier::{
    ActiveNotification, NotificationCenter, NotificationId, Notifier, RecordingNotifier,
};
pub use crate::transport::{get_list, HttpTransport, Transport};
