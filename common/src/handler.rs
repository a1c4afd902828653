//! [`Handler`] abstractions.

use std::future::Future;

/// Uniform execution abstraction of the front end.
///
/// Commands, queries, and infrastructure operations (remote backend
/// calls, client-local storage) all share this shape: a handler executed
/// with typed arguments, resolving to a typed result.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
