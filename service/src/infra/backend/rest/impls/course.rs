//! Catalog-related [`Backend`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    read,
};

impl Backend<Select<By<read::dashboard::Aggregate, ()>>> for Rest {
    type Ok = read::dashboard::Aggregate;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(_): Select<By<read::dashboard::Aggregate, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::json(self.request(Method::GET, "/courses/dashboard"))
            .await
            .map_err(tracerr::map_from)
    }
}
