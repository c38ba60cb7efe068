use rocket::{
    self,
    http::Status,
    request::{FromRequest, Outcome, Request},
};

pub const COOKIE_USER_KEY: &str = "fmap-user";

/// The authenticated account taken from the private session cookie.
///
/// Routes guarded by `Account` forward when the cookie is missing,
/// a rank-2 sibling route then redirects to the login page.
#[derive(Debug)]
pub struct Account(String);

impl Account {
    pub fn username(&self) -> &str {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        match request.cookies().get_private(COOKIE_USER_KEY) {
            Some(cookie) => Outcome::Success(Account(cookie.value().to_string())),
            None => Outcome::Forward(Status::SeeOther),
        }
    }
}
