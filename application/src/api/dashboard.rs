//! Dashboard endpoint.

use axum::Json;
use service::{query, read, Query as _};

use crate::{AsError, Context, Error};

/// `GET /dashboard` endpoint.
///
/// Delivers the aggregate the navigation tree and the landing sections
/// are populated from. An empty backend payload yields empty lists, not
/// an error.
///
/// # Errors
///
/// Errors if the backend is not reachable.
pub async fn show(
    context: Context,
) -> Result<Json<read::dashboard::Aggregate>, Error> {
    context
        .service()
        .execute(query::dashboard::Aggregate::by(()))
        .await
        .map(Json)
        .map_err(AsError::into_error)
}
