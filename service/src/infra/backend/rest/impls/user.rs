//! [`User`]-related [`Backend`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::User,
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    read,
};

/// Wire shape of the paginated admin user listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListBody {
    /// Users of the requested page.
    #[serde(default)]
    users: Vec<User>,

    /// Total count of users across all pages.
    #[serde(default)]
    total_users: u64,
}

impl Backend<Select<By<read::user::list::Page, read::user::list::Selector>>>
    for Rest
{
    type Ok = read::user::list::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::user::list::Page, read::user::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let mut req = self
            .request(Method::GET, "/user/getAllUsers")
            .bearer_auth(selector.filter.token.as_ref())
            .query(&[
                ("page", selector.page.get().to_string()),
                ("size", selector.size.get().to_string()),
            ]);
        if let Some(query) = &selector.filter.query {
            req = req.query(&[("query", query)]);
        }

        let body: ListBody =
            Rest::json(req).await.map_err(tracerr::map_from)?;

        Ok(read::user::list::Page::new(
            &selector,
            body.users,
            body.total_users,
        ))
    }
}

impl Backend<Select<By<read::user::list::TotalCount, read::user::list::Filter>>>
    for Rest
{
    type Ok = read::user::list::TotalCount;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::user::list::TotalCount, read::user::list::Filter>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();

        let mut req = self
            .request(Method::GET, "/user/getAllUsers")
            .bearer_auth(filter.token.as_ref())
            .query(&[("page", "1"), ("size", "1")]);
        if let Some(query) = &filter.query {
            req = req.query(&[("query", query)]);
        }

        let body: ListBody =
            Rest::json(req).await.map_err(tracerr::map_from)?;

        Ok(body.total_users.into())
    }
}
