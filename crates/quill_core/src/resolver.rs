//! Mention resolvers handed to transcript renderers.
//!
//! A [`ResolverSet`] maps every [`EntityKind`](crate::EntityKind) to an
//! asynchronous lookup `id -> Option<Entity>`. Sets are built from a fully
//! populated default set and a caller-supplied [`ResolverOverrides`]; the
//! overlay replaces whole entries and never composes two functions for the
//! same kind.

use crate::{Channel, Role, Snowflake, User};
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Asynchronous lookup of one entity kind.
///
/// Returning `None` means the entity is unknown or could not be fetched.
pub type Resolver<T> = Arc<dyn Fn(Snowflake) -> BoxFuture<'static, Option<T>> + Send + Sync>;

/// Wrap an async closure into a [`Resolver`].
///
/// # Examples
///
/// ```
/// use quill_core::{Role, Snowflake, resolver_fn};
///
/// let resolver = resolver_fn(|id: Snowflake| async move {
///     Role::builder().id(id).name("mods").build().ok()
/// });
/// # let _ = resolver;
/// ```
pub fn resolver_fn<T, F, Fut>(lookup: F) -> Resolver<T>
where
    F: Fn(Snowflake) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<T>> + Send + 'static,
{
    Arc::new(move |id: Snowflake| lookup(id).boxed())
}

/// A resolver that never finds anything and performs no work.
pub fn null_resolver<T: Send + 'static>() -> Resolver<T> {
    Arc::new(|_: Snowflake| futures::future::ready(None).boxed())
}

/// Complete mapping from entity kind to resolver.
#[derive(Clone)]
pub struct ResolverSet {
    channel: Resolver<Channel>,
    user: Resolver<User>,
    role: Resolver<Role>,
}

impl ResolverSet {
    /// Build a set from one resolver per kind.
    pub fn new(channel: Resolver<Channel>, user: Resolver<User>, role: Resolver<Role>) -> Self {
        Self {
            channel,
            user,
            role,
        }
    }

    /// A set whose every resolver yields `None`.
    pub fn unresolved() -> Self {
        Self::new(null_resolver(), null_resolver(), null_resolver())
    }

    /// Overlay caller overrides, key by key.
    ///
    /// A present override fully replaces the entry for its kind.
    pub fn overlay(self, overrides: &ResolverOverrides) -> Self {
        Self {
            channel: overrides.channel.clone().unwrap_or(self.channel),
            user: overrides.user.clone().unwrap_or(self.user),
            role: overrides.role.clone().unwrap_or(self.role),
        }
    }

    /// Resolve a channel mention.
    pub async fn resolve_channel(&self, id: Snowflake) -> Option<Channel> {
        (self.channel)(id).await
    }

    /// Resolve a user mention.
    pub async fn resolve_user(&self, id: Snowflake) -> Option<User> {
        (self.user)(id).await
    }

    /// Resolve a role mention.
    pub async fn resolve_role(&self, id: Snowflake) -> Option<Role> {
        (self.role)(id).await
    }
}

impl fmt::Debug for ResolverSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverSet").finish_non_exhaustive()
    }
}

/// Partial mapping from entity kind to resolver.
///
/// # Examples
///
/// ```
/// use quill_core::{ResolverOverrides, null_resolver};
///
/// let overrides = ResolverOverrides::default().with_user(null_resolver());
/// assert!(overrides.user().is_some());
/// assert!(overrides.role().is_none());
/// ```
#[derive(Clone, Default)]
pub struct ResolverOverrides {
    channel: Option<Resolver<Channel>>,
    user: Option<Resolver<User>>,
    role: Option<Resolver<Role>>,
}

impl ResolverOverrides {
    /// Replace the channel resolver.
    pub fn with_channel(mut self, resolver: Resolver<Channel>) -> Self {
        self.channel = Some(resolver);
        self
    }

    /// Replace the user resolver.
    pub fn with_user(mut self, resolver: Resolver<User>) -> Self {
        self.user = Some(resolver);
        self
    }

    /// Replace the role resolver.
    pub fn with_role(mut self, resolver: Resolver<Role>) -> Self {
        self.role = Some(resolver);
        self
    }

    /// Channel override, if any.
    pub fn channel(&self) -> Option<&Resolver<Channel>> {
        self.channel.as_ref()
    }

    /// User override, if any.
    pub fn user(&self) -> Option<&Resolver<User>> {
        self.user.as_ref()
    }

    /// Role override, if any.
    pub fn role(&self) -> Option<&Resolver<Role>> {
        self.role.as_ref()
    }

    /// Whether no kind is overridden.
    pub fn is_empty(&self) -> bool {
        self.channel.is_none() && self.user.is_none() && self.role.is_none()
    }
}

impl fmt::Debug for ResolverOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverOverrides")
            .field("channel", &self.channel.is_some())
            .field("user", &self.user.is_some())
            .field("role", &self.role.is_some())
            .finish()
    }
}
