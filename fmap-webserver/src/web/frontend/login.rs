use maud::Markup;
use rocket::{
    self,
    form::Form,
    get,
    http::{Cookie, CookieJar, SameSite},
    post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::view;
use crate::web::{guards::*, sqlite::Connections};
use fmap_core::usecases::{self, Error as ParameterError};

#[derive(FromForm)]
pub struct LoginCredentials<'r> {
    pub(crate) username: &'r str,
    pub(crate) password: &'r str,
}

#[allow(clippy::result_large_err)]
#[get("/login")]
pub fn get_login(
    account: Option<Account>,
    flash: Option<FlashMessage>,
) -> std::result::Result<Markup, Redirect> {
    if account.is_some() {
        Err(Redirect::to(uri!(super::get_index(page = _))))
    } else {
        Ok(view::login(flash))
    }
}

#[allow(clippy::result_large_err)]
#[post("/login", data = "<credentials>")]
pub fn post_login(
    db: Connections,
    credentials: Form<LoginCredentials>,
    cookies: &CookieJar<'_>,
) -> std::result::Result<Redirect, Flash<Redirect>> {
    let Ok(db) = db.shared() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_login)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    let login = usecases::Credentials {
        username: credentials.username,
        password: credentials.password,
    };
    match usecases::login_with_username(&db, &login) {
        Err(err) => {
            let msg = match err {
                ParameterError::Credentials => "Invalid username or password.",
                _ => "We are so sorry, something went wrong :(",
            };
            Err(Flash::error(Redirect::to(uri!(get_login)), msg))
        }
        Ok(user) => {
            cookies.add_private(
                Cookie::build((COOKIE_USER_KEY, user.username))
                    .http_only(true)
                    .same_site(SameSite::Lax),
            );
            Ok(Redirect::to(uri!(super::get_index(page = _))))
        }
    }
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Flash<Redirect> {
    cookies.remove_private(COOKIE_USER_KEY);
    Flash::success(
        Redirect::to(uri!(super::get_index(page = _))),
        "You have successfully logged out.",
    )
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::web::tests::{prelude::*, register_user, rocket_test_setup};

    fn setup() -> (Client, Connections) {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    fn user_cookie(response: &LocalResponse) -> Option<Cookie<'static>> {
        let cookie = response
            .headers()
            .get("Set-Cookie")
            .find(|v| v.starts_with(COOKIE_USER_KEY))
            .and_then(|val| Cookie::parse_encoded(val).ok());
        cookie.map(|c| c.into_owned())
    }

    #[test]
    fn get_login() {
        let (client, _) = setup();
        let res = client.get("/login").dispatch();
        assert_eq!(res.status(), Status::Ok);
        assert!(user_cookie(&res).is_none());
        let body_str = res.into_string().unwrap();
        assert!(body_str.contains("action=\"login\""));
    }

    #[test]
    fn post_login_fails() {
        let (client, pool) = setup();
        register_user(&pool, "foo", "bazbaz");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=foo&password=invalid")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        for h in res.headers().iter() {
            match h.name.as_str() {
                "Location" => assert_eq!(h.value, "/login"),
                "Content-Length" => assert_eq!(h.value.parse::<i32>().unwrap(), 0),
                _ => { /* let these through */ }
            }
        }
    }

    #[test]
    fn post_login_success() {
        let (client, pool) = setup();
        register_user(&pool, "foo", "baz baz");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=foo&password=baz baz")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert!(user_cookie(&res).is_some());
        for h in res.headers().iter() {
            match h.name.as_str() {
                "Location" => assert_eq!(h.value, "/"),
                "Content-Length" => assert_eq!(h.value.parse::<i32>().unwrap(), 0),
                _ => { /* let these through */ }
            }
        }
    }

    #[test]
    fn post_logout_clears_the_session() {
        let (client, pool) = setup();
        register_user(&pool, "foo", "secret1");
        client
            .post("/login")
            .header(ContentType::Form)
            .body("username=foo&password=secret1")
            .dispatch();
        let res = client.post("/logout").dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        let res = client.get("/wishlist").dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
    }
}
