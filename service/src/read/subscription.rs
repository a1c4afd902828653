//! [`Subscription`] read model definition.
//!
//! [`Subscription`]: crate::domain::Subscription

use crate::domain::{subscription, user, user::session};

/// Selector of all [`Subscription`]s owned by a [`User`].
///
/// [`Subscription`]: crate::domain::Subscription
/// [`User`]: crate::domain::User
#[derive(Clone, Debug)]
pub struct Owned {
    /// ID of the owning [`User`].
    ///
    /// [`User`]: crate::domain::User
    pub user_id: user::Id,

    /// Bearer token of the requesting [`User`].
    ///
    /// [`User`]: crate::domain::User
    pub token: session::Token,
}

/// Selector of the [`Course`]s granted by a [`Subscription`].
///
/// [`Course`]: crate::domain::Course
/// [`Subscription`]: crate::domain::Subscription
#[derive(Clone, Debug)]
pub struct Courses {
    /// ID of the [`Subscription`].
    ///
    /// [`Subscription`]: crate::domain::Subscription
    pub subscription_id: subscription::Id,

    /// Bearer token of the requesting [`User`].
    ///
    /// [`User`]: crate::domain::User
    pub token: session::Token,
}
