use crate::{email::EmailAddress, id::Id, password::Password};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id         : Id,
    pub username   : String,
    pub first_name : String,
    pub last_name  : String,
    pub email      : EmailAddress,
    pub password   : Password,
}
