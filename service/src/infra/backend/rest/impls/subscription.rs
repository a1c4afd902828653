//! [`Subscription`]-related [`Backend`] implementations.

use common::operations::{By, Select};
use reqwest::Method;
use tracerr::Traced;

use crate::{
    domain::{Course, Subscription},
    infra::{
        backend::{self, rest::Rest},
        Backend,
    },
    read,
};

impl Backend<Select<By<Vec<Subscription>, read::subscription::Owned>>>
    for Rest
{
    type Ok = Vec<Subscription>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Subscription>, read::subscription::Owned>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::subscription::Owned { user_id, token } = by.into_inner();

        Rest::json(
            self.request(
                Method::GET,
                &format!("/subscriptions/user/{user_id}"),
            )
            .bearer_auth(token.as_ref()),
        )
        .await
        .map_err(tracerr::map_from)
    }
}

impl Backend<Select<By<Vec<Course>, read::subscription::Courses>>> for Rest {
    type Ok = Vec<Course>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Course>, read::subscription::Courses>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::subscription::Courses {
            subscription_id,
            token,
        } = by.into_inner();

        Rest::json(
            self.request(
                Method::GET,
                &format!("/subscriptions/{subscription_id}/courses"),
            )
            .bearer_auth(token.as_ref()),
        )
        .await
        .map_err(tracerr::map_from)
    }
}
