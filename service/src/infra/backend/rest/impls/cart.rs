//! Cart-related [`Backend`] implementations.

use common::operations::{By, Insert, Select, Update};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::cart,
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    read,
};

impl Backend<Insert<cart::NewItem>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Insert(item): Insert<cart::NewItem>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::send(self.request(Method::POST, "/cart/add").json(&item))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}

impl Backend<Select<By<read::cart::Summary, cart::Id>>> for Rest {
    type Ok = read::cart::Summary;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::cart::Summary, cart::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let cart_id = by.into_inner();
        Rest::json(
            self.request(Method::GET, "/cart/items")
                .query(&[("cartId", AsRef::<str>::as_ref(&cart_id))]),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Update<cart::QuantityUpdate>> for Rest {
    type Ok = ();
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Update(update): Update<cart::QuantityUpdate>,
    ) -> Result<Self::Ok, Self::Err> {
        Rest::send(self.request(Method::PUT, "/cart/update").json(&update))
            .await
            .map(drop)
            .map_err(tracerr::map_from)
    }
}
