use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use futures::future::join_all;
use roster_core::{
    created_user_message, deleted_users_message, paths, updated_user_message, Role, User, UserId,
    SUPPORT_ERROR_MESSAGE,
};
use serde::de::DeserializeOwned;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::{AccessConfig, PartialDeletePolicy, RefreshMode};
use crate::error::ClientError;
use crate::notifier::Notifier;
use crate::transport::{get_list, Transport};

/// Cached view of the remote users and roles.
///
/// Each slot is `None` until its first successful fetch and is replaced
/// wholesale by every later one. Mutations never touch the cache directly:
/// on success they trigger a user refresh, on failure they leave it as is.
/// Failures are absorbed and reported through the notifier; no operation
/// returns an error to its caller.
///
/// Must be driven from inside a Tokio runtime: in [`RefreshMode::Detached`]
/// the post-mutation refresh is spawned onto the current runtime.
pub struct UserAccess<T, N> {
    inner: Arc<Inner<T, N>>,
}

struct Inner<T, N> {
    transport: T,
    notifier: N,
    config: AccessConfig,
    users: RwLock<Option<Vec<User>>>,
    roles: RwLock<Option<Vec<Role>>>,
    refreshes: Mutex<JoinSet<()>>,
}

impl<T, N> Clone for UserAccess<T, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport, N: Notifier> UserAccess<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self::with_config(transport, notifier, AccessConfig::default())
    }

    pub fn with_config(transport: T, notifier: N, config: AccessConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                transport,
                notifier,
                config,
                users: RwLock::new(None),
                roles: RwLock::new(None),
                refreshes: Mutex::new(JoinSet::new()),
            }),
        }
    }

    pub fn users(&self) -> Option<Vec<User>> {
        self.inner
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn roles(&self) -> Option<Vec<Role>> {
        self.inner
            .roles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn config(&self) -> AccessConfig {
        self.inner.config
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn notifier(&self) -> &N {
        &self.inner.notifier
    }

    pub async fn fetch_roles(&self) {
        match self.load::<Role>(paths::ROLES).await {
            Ok(roles) => {
                info!(count = roles.len(), "roles cache replaced");
                *self
                    .inner
                    .roles
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(roles);
            }
            Err(err) => self.display_error(&err),
        }
    }

    pub async fn fetch_users(&self) {
        match self.load::<User>(paths::USERS).await {
            Ok(users) => {
                info!(count = users.len(), "users cache replaced");
                *self
                    .inner
                    .users
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(users);
            }
            Err(err) => self.display_error(&err),
        }
    }

    pub async fn create_user(&self, new_user: User) {
        let result = match serde_json::to_value(&new_user) {
            Ok(payload) => self.inner.transport.post(paths::USERS, payload).await,
            Err(err) => Err(ClientError::from(err)),
        };
        match result {
            Ok(_) => {
                self.refresh_users().await;
                self.display_success(&created_user_message(&new_user.login));
            }
            Err(err) => self.display_error(&err),
        }
    }

    pub async fn update_user(&self, user: User) {
        let Some(id) = user.id else {
            self.display_error(&ClientError::MissingId { login: user.login });
            return;
        };
        let result = match serde_json::to_value(&user) {
            Ok(payload) => self.inner.transport.put(&paths::user(id), payload).await,
            Err(err) => Err(ClientError::from(err)),
        };
        match result {
            Ok(_) => {
                self.refresh_users().await;
                self.display_success(&updated_user_message(&user.login));
            }
            Err(err) => self.display_error(&err),
        }
    }

    /// Deletes every id concurrently and reports the batch as one outcome.
    ///
    /// A single failed request fails the whole batch even if other deletions
    /// went through; [`PartialDeletePolicy`] decides whether the cache is
    /// refreshed in that case.
    pub async fn delete_users(&self, user_ids: &[UserId]) {
        let requests = user_ids.iter().map(|id| async move {
            let result = self.inner.transport.delete(&paths::user(*id)).await;
            (*id, result)
        });
        let results = join_all(requests).await;

        let mut failed = 0;
        for (id, result) in results {
            if let Err(err) = result {
                warn!(user_id = %id, error = %err, "user deletion failed");
                failed += 1;
            }
        }

        if failed == 0 {
            self.refresh_users().await;
            self.display_success(&deleted_users_message(user_ids.len()));
            return;
        }

        self.display_error(&ClientError::BatchDelete {
            failed,
            total: user_ids.len(),
        });
        if self.inner.config.partial_delete == PartialDeletePolicy::RollForward {
            self.refresh_users().await;
        }
    }

    /// Waits for every detached refresh, including ones spawned while waiting.
    pub async fn settle(&self) {
        loop {
            let mut refreshes = {
                let mut pending = self.lock_refreshes();
                std::mem::take(&mut *pending)
            };
            if refreshes.is_empty() {
                return;
            }
            while let Some(result) = refreshes.join_next().await {
                if let Err(err) = result {
                    warn!(error = %err, "detached user refresh did not complete");
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_refreshes(&self) -> usize {
        self.lock_refreshes().len()
    }

    pub fn display_error(&self, reason: &dyn fmt::Display) {
        error!(error = %reason, "user access request failed");
        self.inner.notifier.notify_error(SUPPORT_ERROR_MESSAGE);
    }

    pub fn display_success(&self, message: &str) {
        self.inner.notifier.notify_success(message);
    }

    async fn refresh_users(&self) {
        match self.inner.config.refresh {
            RefreshMode::Awaited => self.fetch_users().await,
            RefreshMode::Detached => {
                let access = self.clone();
                let mut refreshes = self.lock_refreshes();
                while let Some(result) = refreshes.try_join_next() {
                    if let Err(err) = result {
                        warn!(error = %err, "detached user refresh did not complete");
                    }
                }
                refreshes.spawn(async move {
                    access.fetch_users().await;
                });
            }
        }
    }

    fn lock_refreshes(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.inner
            .refreshes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    async fn load<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ClientError> {
        get_list(&self.inner.transport, path).await
    }
}
