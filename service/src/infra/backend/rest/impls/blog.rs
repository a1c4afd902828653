//! [`Blog`]-related [`Backend`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use serde::Deserialize;
use tracerr::Traced;

use crate::{
    domain::{blog, Blog},
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    read,
};

/// Wire shape of the paginated blog listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListBody {
    /// Blogs of the requested page.
    #[serde(default)]
    blogs: Vec<read::blog::list::Preview>,

    /// Total count of blogs across all pages.
    #[serde(default)]
    total: u64,
}

impl Backend<Select<By<read::blog::list::Page, read::blog::list::Selector>>>
    for Rest
{
    type Ok = read::blog::list::Page;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<
            By<read::blog::list::Page, read::blog::list::Selector>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let selector = by.into_inner();

        let body: ListBody = Rest::json(
            self.request(Method::GET, "/blogs").query(&[
                ("page", selector.page.get().to_string()),
                ("size", selector.size.get().to_string()),
            ]),
        )
        .await
        .map_err(tracerr::map_from)?;

        Ok(read::blog::list::Page::new(&selector, body.blogs, body.total))
    }
}

impl Backend<Select<By<Option<Blog>, blog::Id>>> for Rest {
    type Ok = Option<Blog>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Blog>, blog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Rest::json_opt(self.request(Method::GET, &format!("/blogs/{id}")))
            .await
            .map_err(tracerr::map_from)
    }
}

impl Backend<Insert<blog::New>> for Rest {
    type Ok = Blog;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<blog::New>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(self.request(Method::POST, "/blogs").json(&new))
            .await
            .map_err(tracerr::map_from)
    }
}

impl Backend<Update<blog::Edit>> for Rest {
    type Ok = Blog;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(edit): Update<blog::Edit>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(
            self.request(Method::PUT, &format!("/blogs/{}", edit.id))
                .json(&edit),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Delete<By<Blog, blog::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Blog, blog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Rest::send(self.request(Method::DELETE, &format!("/blogs/{id}")))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}
