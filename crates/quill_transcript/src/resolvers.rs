//! Default mention resolvers bound to a chat service.

use quill_core::{
    Channel, ChatService, EntityKind, Resolver, ResolverSet, Snowflake, null_resolver, resolver_fn,
};
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// Adapt a fallible lookup into a [`Resolver`] that never fails.
///
/// A lookup error is logged and turned into `None`, so a mention that cannot
/// be resolved degrades to a placeholder instead of aborting the render.
///
/// # Examples
///
/// ```
/// use quill_core::{EntityKind, Snowflake, User};
/// use quill_transcript::suppress;
///
/// let resolver = suppress(EntityKind::User, |_id: Snowflake| async {
///     Err::<User, _>("gateway timeout")
/// });
/// let resolved = futures::executor::block_on(resolver(Snowflake::new(1)));
/// assert!(resolved.is_none());
/// ```
pub fn suppress<T, E, F, Fut>(kind: EntityKind, lookup: F) -> Resolver<T>
where
    T: Send + 'static,
    E: Display,
    F: Fn(Snowflake) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    resolver_fn(move |id| {
        let pending = lookup(id);
        async move {
            match pending.await {
                Ok(entity) => Some(entity),
                Err(e) => {
                    debug!(entity = %kind, id = %id, error = %e, "Mention lookup failed, leaving unresolved");
                    None
                }
            }
        }
    })
}

/// Build the default resolver set for mentions found in `channel`.
///
/// Every entry calls the matching lookup on `service` through [`suppress`].
/// Direct-message channels have no role namespace, so their role resolver
/// answers `None` without contacting the service.
pub fn default_resolvers<S>(service: Arc<S>, channel: &Channel) -> ResolverSet
where
    S: ChatService + ?Sized + 'static,
{
    let channel_resolver = {
        let service = Arc::clone(&service);
        suppress(EntityKind::Channel, move |id| {
            let service = Arc::clone(&service);
            async move { service.fetch_channel(id).await }
        })
    };

    let user_resolver = {
        let service = Arc::clone(&service);
        suppress(EntityKind::User, move |id| {
            let service = Arc::clone(&service);
            async move { service.fetch_user(id).await }
        })
    };

    let guild_id = channel.guild().as_ref().map(|guild| *guild.id());
    let role_resolver = match guild_id {
        Some(guild_id) if !channel.is_dm_based() => suppress(EntityKind::Role, move |id| {
            let service = Arc::clone(&service);
            async move { service.fetch_role(guild_id, id).await }
        }),
        _ => {
            debug!(channel_id = %channel.id(), "No role namespace, role mentions stay unresolved");
            null_resolver()
        }
    };

    ResolverSet::new(channel_resolver, user_resolver, role_resolver)
}
