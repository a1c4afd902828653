//! [`Blog`] read model definition.
//!
//! [`Blog`]: crate::domain::Blog

pub mod list {
    //! [`Blog`]s list definitions.
    //!
    //! [`Blog`]: crate::domain::Blog

    use common::define_pagination;
    use serde::{Deserialize, Serialize};

    use crate::domain::blog;
    #[cfg(doc)]
    use crate::domain::Blog;

    define_pagination!(Preview, Filter);

    /// Listing line of a [`Blog`], without its body.
    #[derive(Clone, Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Preview {
        /// ID of the [`Blog`].
        pub id: blog::Id,

        /// Title of the [`Blog`].
        pub title: blog::Title,

        /// Author of the [`Blog`].
        pub author: blog::Author,

        /// Cover image of the [`Blog`].
        pub image: Option<blog::ImageUrl>,

        /// When the [`Blog`] was created.
        #[serde(with = "common::datetime::serde::rfc3339")]
        pub created_at: blog::CreationDateTime,
    }

    /// Filter for [`Selector`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter;
}
