//! [`Material`]-related [`Backend`] implementations.

use common::operations::{Attach, By, Delete, Insert, Select};
use reqwest::{
    multipart::{Form, Part},
    Method,
};
use tracerr::Traced;

use crate::{
    domain::{material, module, Material},
    infra::{
        backend::{self, rest, rest::Rest},
        Backend,
    },
};

impl Backend<Select<By<Vec<Material>, module::Id>>> for Rest {
    type Ok = Vec<Material>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Material>, module::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let module_id = by.into_inner();
        Rest::json(
            self.request(Method::GET, "/materials")
                .query(&[("moduleId", module_id.to_string())]),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Insert<material::New>> for Rest {
    type Ok = Material;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(new): Insert<material::New>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(self.request(Method::POST, "/materials").json(&new))
            .await
            .map_err(tracerr::map_from)
    }
}

impl Backend<Attach<material::FileUpload>> for Rest {
    type Ok = material::File;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Attach(upload): Attach<material::FileUpload>,
    ) -> Result<Self::Ok, Self::Err> {
        let material::FileUpload { material_id, file } = upload;

        let part = Part::bytes(file.bytes)
            .file_name(file.name.to_string())
            .mime_str(&file.content_type)
            .map_err(tracerr::from_and_wrap!(=> rest::Error))
            .map_err(tracerr::map_from)?;

        Rest::json(
            self.request(
                Method::POST,
                &format!("/materials/{material_id}/file"),
            )
            .multipart(Form::new().part("file", part)),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Delete<By<Material, material::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Material, material::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Rest::send(self.request(Method::DELETE, &format!("/materials/{id}")))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}
