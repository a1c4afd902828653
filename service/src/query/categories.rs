//! [`Query`] collection related to the multiple [`Category`]s.
//!
//! [`Category`]: crate::domain::Category

use common::operations::By;

#[cfg(doc)]
use crate::Query;
use crate::domain::Category;

use super::BackendQuery;

/// Queries a list of [`Category`]s.
pub type List = BackendQuery<By<Vec<Category>, Filter>>;

/// Filter of the [`List`] query.
#[derive(Clone, Copy, Debug, Default)]
pub struct Filter {
    /// Indicator whether deactivated [`Category`]s should be included.
    ///
    /// Customer-facing listings keep it off; the admin dashboard turns it
    /// on.
    pub include_inactive: bool,
}
