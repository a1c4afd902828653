//! [`Subscription`] definitions.

use common::{unit, DateTimeOf};
#[cfg(doc)]
use common::DateTime;
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{cart::access, user};

/// Subscription of a [`User`] to one or more courses.
///
/// [`User`]: crate::domain::User
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// ID of this [`Subscription`].
    pub id: Id,

    /// ID of the [`User`] owning this [`Subscription`].
    ///
    /// [`User`]: crate::domain::User
    pub user_id: user::Id,

    /// [`access::Kind`] this [`Subscription`] was purchased with.
    #[serde(rename = "accessType")]
    pub access: access::Kind,

    /// [`Status`] of this [`Subscription`].
    pub status: Status,

    /// [`DateTime`] when this [`Subscription`] started.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub started_at: StartDateTime,

    /// [`DateTime`] when this [`Subscription`] expires.
    #[serde(default, with = "common::datetime::serde::rfc3339_option")]
    pub expires_at: Option<ExpirationDateTime>,
}

/// ID of a [`Subscription`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Status of a [`Subscription`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The subscription grants access.
    Active = 1,

    /// The subscription ran out.
    Expired = 2,

    /// The subscription was cancelled.
    Cancelled = 3,
}

/// [`DateTime`] when a [`Subscription`] started.
pub type StartDateTime = DateTimeOf<(Subscription, unit::Creation)>;

/// [`DateTime`] when a [`Subscription`] expires.
pub type ExpirationDateTime = DateTimeOf<(Subscription, unit::Expiration)>;
