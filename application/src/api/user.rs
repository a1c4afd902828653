//! [`User`] endpoints.
//!
//! [`User`]: service::domain::User

use axum::{extract::Query, Json};
use serde::Deserialize;
use service::{domain::User, query, read, Query as _};

use crate::{AsError, Context, Error};

use super::{page_params, PageBody};

/// Parameters of the admin user listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// 1-based number of the page to list.
    pub page: Option<u32>,

    /// Size of the page to list.
    pub size: Option<u32>,

    /// Search text to match users against.
    pub query: Option<String>,
}

/// `GET /admin/users?page=&query=` endpoint.
///
/// An admin surface: the bearer token of the caller is forwarded to the
/// backend, which enforces the actual authorization.
///
/// # Errors
///
/// Errors if the request carries no bearer token, or the pagination
/// parameters are out of range.
pub async fn list(
    context: Context,
    Query(params): Query<ListParams>,
) -> Result<Json<PageBody<User>>, Error> {
    let token = context.token()?;
    let (page, size) = page_params(params.page, params.size)?;

    context
        .service()
        .execute(query::users::List::by(read::user::list::Selector {
            page,
            size,
            filter: read::user::list::Filter {
                query: params.query,
                token,
            },
        }))
        .await
        .map(|page| Json(page.into()))
        .map_err(AsError::into_error)
}
