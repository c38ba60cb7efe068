use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The username is invalid")]
    Username,
    #[error("Invalid email address")]
    Email,
    #[error("Invalid password")]
    Password,
    #[error("The passwords do not match")]
    PasswordMismatch,
    #[error("Invalid credentials")]
    Credentials,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid visit date")]
    VisitDate,
    #[error("The place ids do not match")]
    PlaceIdMismatch,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<fmap_entities::password::ParseError> for Error {
    fn from(_: fmap_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<fmap_entities::email::EmailAddressParseError> for Error {
    fn from(_: fmap_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}

impl From<fmap_entities::time::DateParseError> for Error {
    fn from(_: fmap_entities::time::DateParseError) -> Self {
        Self::VisitDate
    }
}
