//! [`Command`] for creating a [`Blog`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{blog, Blog},
    infra::{backend, Backend},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Blog`].
#[derive(Clone, Debug, From)]
pub struct CreateBlog {
    /// [`blog::Title`] of the new [`Blog`].
    pub title: blog::Title,

    /// [`blog::Author`] of the new [`Blog`].
    pub author: blog::Author,

    /// [`blog::Body`] of the new [`Blog`].
    pub body: blog::Body,

    /// Cover image of the new [`Blog`].
    pub image: Option<blog::ImageUrl>,
}

impl<B, S> Command<CreateBlog> for Service<B, S>
where
    B: Backend<Insert<blog::New>, Ok = Blog, Err = Traced<backend::Error>>,
{
    type Ok = Blog;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateBlog) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBlog {
            title,
            author,
            body,
            image,
        } = cmd;

        self.backend()
            .execute(Insert(blog::New {
                title,
                author,
                body,
                image,
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`CreateBlog`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Backend`] error.
    #[display("`Backend` operation failed: {_0}")]
    Backend(backend::Error),
}
