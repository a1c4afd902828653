//! [`Module`]-related [`Backend`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{course, module, Module},
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
};

impl Backend<Select<By<Vec<Module>, course::Id>>> for Rest {
    type Ok = Vec<Module>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Module>, course::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let course_id = by.into_inner();
        Rest::json(
            self.request(Method::GET, "/modules")
                .query(&[("courseId", course_id.to_string())]),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Insert<module::New>> for Rest {
    type Ok = Module;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<module::New>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(self.request(Method::POST, "/modules").json(&new))
            .await
            .map_err(tracerr::map_from)
    }
}

impl Backend<Update<module::Edit>> for Rest {
    type Ok = Module;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(edit): Update<module::Edit>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(
            self.request(Method::PUT, &format!("/modules/{}", edit.id))
                .json(&edit),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Delete<By<Module, module::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Module, module::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Rest::send(self.request(Method::DELETE, &format!("/modules/{id}")))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}
