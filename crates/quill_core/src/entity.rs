//! Entities referenced from message content.

use crate::Snowflake;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Kind of entity a mention can reference.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    /// A channel mention (`<#id>`)
    Channel,
    /// A user mention (`<@id>`)
    User,
    /// A role mention (`<@&id>`)
    Role,
}

/// A user account, either a message author or a mention target.
///
/// # Examples
///
/// ```
/// use quill_core::{Snowflake, User};
///
/// let user = User::builder()
///     .id(Snowflake::new(1))
///     .name("ferris")
///     .display_name(Some("Ferris".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(user.shown_name(), "Ferris");
/// assert!(!user.bot());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct User {
    /// User identifier
    id: Snowflake,
    /// Unique account name
    name: String,
    /// Preferred display name, if set
    #[builder(default)]
    #[serde(default)]
    display_name: Option<String>,
    /// Avatar image URL, if set
    #[builder(default)]
    #[serde(default)]
    avatar_url: Option<String>,
    /// Whether the account is a bot
    #[builder(default)]
    #[serde(default)]
    bot: bool,
}

impl User {
    /// Creates a new user builder.
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Display name if present, account name otherwise.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// A guild role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Role {
    /// Role identifier
    id: Snowflake,
    /// Role name
    name: String,
    /// RGB colour, absent when the role is uncoloured
    #[builder(default)]
    #[serde(default)]
    color: Option<u32>,
}

impl Role {
    /// Creates a new role builder.
    pub fn builder() -> RoleBuilder {
        RoleBuilder::default()
    }
}
