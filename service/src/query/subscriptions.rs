//! [`Query`] collection related to the multiple [`Subscription`]s.
//!
//! [`Subscription`]: crate::domain::Subscription

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::{
    domain::{Course, Subscription},
    read,
};

use super::BackendQuery;

/// Queries all [`Subscription`]s owned by a [`User`].
///
/// [`User`]: crate::domain::User
pub type ByUser = BackendQuery<By<Vec<Subscription>, read::subscription::Owned>>;

/// Queries the [`Course`]s granted by a [`Subscription`].
pub type Courses = BackendQuery<By<Vec<Course>, read::subscription::Courses>>;
