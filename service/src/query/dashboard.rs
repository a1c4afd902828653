//! [`Query`] collection related to the dashboard.

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::read;

use super::BackendQuery;

/// Queries the [`read::dashboard::Aggregate`] populating the navigation
/// tree and the landing sections.
pub type Aggregate = BackendQuery<By<read::dashboard::Aggregate, ()>>;
