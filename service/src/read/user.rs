//! [`User`] read model definition.
//!
//! [`User`]: crate::domain::User

pub mod list {
    //! [`User`]s list definitions.
    //!
    //! [`User`]: crate::domain::User

    use common::define_pagination;
    use derive_more::{From, Into};

    use crate::domain::{user::session, User};

    define_pagination!(User, Filter);

    /// Filter for [`Selector`].
    ///
    /// The listing is an admin surface: the backend rejects it without a
    /// valid bearer [`session::Token`].
    #[derive(Clone, Debug)]
    pub struct Filter {
        /// Search text to match users against.
        pub query: Option<String>,

        /// Bearer token of the requesting administrator.
        pub token: session::Token,
    }

    /// Total count of [`User`]s.
    #[derive(Clone, Copy, Debug, Eq, From, Hash, Into, PartialEq)]
    pub struct TotalCount(u64);
}
