//! [`Command`] for updating a [`Blog`].

use common::operations::Update;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{blog, Blog},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Blog`].
#[derive(Clone, Debug)]
pub struct UpdateBlog {
    /// ID of the [`Blog`] to update.
    pub id: blog::Id,

    /// New [`blog::Title`] of the [`Blog`].
    pub title: blog::Title,

    /// New [`blog::Author`] of the [`Blog`].
    pub author: blog::Author,

    /// New [`blog::Body`] of the [`Blog`].
    pub body: blog::Body,

    /// New cover image of the [`Blog`].
    pub image: Option<blog::ImageUrl>,
}

impl<B, S> Command<UpdateBlog> for Service<B, S>
where
    B: Backend<Update<blog::Edit>, Ok = Blog, Err = Traced<backend::Error>>,
{
    type Ok = Blog;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateBlog) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateBlog {
            id,
            title,
            author,
            body,
            image,
        } = cmd;

        self.backend()
            .execute(Update(blog::Edit {
                id,
                title,
                author,
                body,
                image,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`UpdateBlog`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
