//! [`Category`]-related [`Backend`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{category, Category},
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    query,
};

impl Backend<Select<By<Vec<Category>, query::categories::Filter>>> for Rest {
    type Ok = Vec<Category>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Category>, query::categories::Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = by.into_inner();
        Rest::json(
            self.request(Method::GET, "/categories").query(&[(
                "includeInactive",
                filter.include_inactive.to_string(),
            )]),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Insert<category::New>> for Rest {
    type Ok = Category;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<category::New>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(self.request(Method::POST, "/categories").json(&new))
            .await
            .map_err(tracerr::map_from)
    }
}

impl Backend<Update<category::Edit>> for Rest {
    type Ok = Category;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(edit): Update<category::Edit>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(
            self.request(Method::PUT, &format!("/categories/{}", edit.id))
                .json(&edit),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Delete<By<Category, category::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Category, category::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Rest::send(self.request(Method::DELETE, &format!("/categories/{id}")))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}
