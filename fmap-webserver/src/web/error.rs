use fmap_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::Parameter(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => match err {
                ParameterError::Repo(RepoError::NotFound) => Err(Status::NotFound),
                ParameterError::Repo(repo_err) => {
                    error!("Repository error: {repo_err}");
                    Err(Status::InternalServerError)
                }
                ParameterError::Credentials | ParameterError::Unauthorized => {
                    Err(Status::Unauthorized)
                }
                _ => Err(Status::BadRequest),
            },
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
