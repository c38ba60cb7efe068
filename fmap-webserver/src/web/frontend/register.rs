use maud::Markup;
use rocket::{self, form::Form, get, post, request::FlashMessage, FromForm};

use super::view;
use crate::web::{error::Error, sqlite};
use fmap_core::usecases::{
    self,
    forms::{FieldErrors, RegistrationForm},
    Error as ParameterError,
};

type Result<T> = std::result::Result<T, Error>;

#[get("/register")]
pub fn get_register(flash: Option<FlashMessage>) -> Markup {
    view::register(flash, &RegistrationForm::default(), None)
}

#[derive(FromForm)]
pub struct RegistrationData<'r> {
    username: &'r str,
    first_name: &'r str,
    email: &'r str,
    password: &'r str,
    password2: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/register", data = "<data>")]
pub fn post_register(db: sqlite::Connections, data: Form<RegistrationData>) -> Result<Markup> {
    let data = data.into_inner();
    let form = RegistrationForm {
        username: data.username.to_string(),
        first_name: data.first_name.to_string(),
        email: data.email.to_string(),
        password: data.password.to_string(),
        password2: data.password2.to_string(),
    };
    let new_user = match form.clone().validate() {
        Ok(new_user) => new_user,
        Err(errors) => return Ok(view::register(None, &form, Some(&errors))),
    };
    let mut db = db.exclusive()?;
    match db.transaction(|db| usecases::create_new_user(db, new_user)) {
        Ok(user) => Ok(view::register_done(&user.username)),
        Err(ParameterError::UserExists) => {
            let mut errors = FieldErrors::default();
            errors.add("username", "A user with this username already exists.");
            Ok(view::register(None, &form, Some(&errors)))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::{prelude::*, rocket_test_setup};

    fn setup() -> (Client, sqlite::Connections) {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    #[test]
    fn get_register_form() {
        let (client, _) = setup();
        let res = client.get("/register").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("action=\"register\""));
    }

    #[test]
    fn register_a_new_user() {
        let (client, pool) = setup();
        let res = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=alice&first_name=Alice&email=alice%40example.org&password=secret1&password2=secret1")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("alice"));
        let db = pool.shared().unwrap();
        let user = db.get_user_by_username("alice").unwrap();
        assert!(user.password.verify("secret1"));
    }

    #[test]
    fn reject_mismatching_passwords() {
        let (client, pool) = setup();
        let res = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=alice&first_name=Alice&email=alice%40example.org&password=p1p1p1&password2=p2p2p2")
            .dispatch();
        // The form is redisplayed with an error, nothing is stored.
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Passwords don't match."));
        let db = pool.shared().unwrap();
        assert!(db.try_get_user_by_username("alice").unwrap().is_none());
    }

    #[test]
    fn reject_a_taken_username() {
        let (client, pool) = setup();
        register_user(&pool, "alice", "secret1");
        let res = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=alice&first_name=Alice&email=other%40example.org&password=secret2&password2=secret2")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("already exists"));
        let db = pool.shared().unwrap();
        assert_eq!(db.count_users().unwrap(), 1);
    }
}
