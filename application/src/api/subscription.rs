//! [`Subscription`] endpoints.
//!
//! [`Subscription`]: service::domain::Subscription

use axum::{extract::Path, Json};
use service::{
    domain::{subscription, Course, Subscription},
    query, read, Query as _,
};

use crate::{AsError, Context, Error};

/// `GET /subscriptions` endpoint.
///
/// Lists the subscriptions of the authenticated caller.
///
/// # Errors
///
/// Errors if the request carries no valid bearer token.
pub async fn list(
    context: Context,
) -> Result<Json<Vec<Subscription>>, Error> {
    let identity = context.require_identity()?;
    let token = context.token()?;

    context
        .service()
        .execute(query::subscriptions::ByUser::by(read::subscription::Owned {
            user_id: identity.user_id,
            token,
        }))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}

/// `GET /subscriptions/{id}/courses` endpoint.
///
/// # Errors
///
/// Errors if the request carries no valid bearer token.
pub async fn courses(
    context: Context,
    Path(id): Path<subscription::Id>,
) -> Result<Json<Vec<Course>>, Error> {
    let token = context.token()?;

    context
        .service()
        .execute(query::subscriptions::Courses::by(
            read::subscription::Courses {
                subscription_id: id,
                token,
            },
        ))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}
