use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{Flash, Redirect},
    uri, FromForm,
};

use super::{login, view};
use crate::web::{error::Error, guards::*, sqlite};
use fmap_core::{
    entities::User,
    repositories::{PlaceRepo, UserRepo},
    usecases::{
        self,
        forms::{FieldErrors, ProfileForm, VisitForm},
        Error as ParameterError,
    },
};

type Result<T> = std::result::Result<T, Error>;

fn current_user(db: &sqlite::Connections, account: &Account) -> Result<User> {
    let db = db.shared()?;
    db.try_get_user_by_username(account.username())?
        .ok_or_else(|| ParameterError::Unauthorized.into())
}

#[get("/wishlist?<page>")]
pub fn get_wishlist(
    db: sqlite::Connections,
    account: Account,
    page: Option<&str>,
) -> Result<Markup> {
    let user = current_user(&db, &account)?;
    let wishlist = usecases::list_wishlist(&db.shared()?, user.id.as_str(), page)?;
    Ok(view::wishlist(&user.username, &wishlist))
}

#[get("/wishlist?<_page>", rank = 2)]
pub fn get_wishlist_login_redirect(_page: Option<&str>) -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[get("/history?<page>")]
pub fn get_history(
    db: sqlite::Connections,
    account: Account,
    page: Option<&str>,
) -> Result<Markup> {
    let user = current_user(&db, &account)?;
    let history = usecases::list_visits(&db.shared()?, user.id.as_str(), page)?;
    Ok(view::history_list(&user.username, &history))
}

#[get("/history?<_page>", rank = 2)]
pub fn get_history_login_redirect(_page: Option<&str>) -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[get("/add_history")]
pub fn get_add_history(db: sqlite::Connections, account: Account) -> Result<Markup> {
    let user = current_user(&db, &account)?;
    let places = db.shared()?.all_places()?;
    Ok(view::add_history(
        &user.username,
        &places,
        &VisitForm::default(),
        None,
    ))
}

#[get("/add_history", rank = 2)]
pub fn get_add_history_login_redirect() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[derive(FromForm)]
pub struct VisitData<'r> {
    place_id: &'r str,
    visited_on: &'r str,
    comment: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/add_history", data = "<data>")]
pub fn post_add_history(
    db: sqlite::Connections,
    account: Account,
    data: Form<VisitData>,
) -> Result<std::result::Result<Redirect, Markup>> {
    let user = current_user(&db, &account)?;
    let data = data.into_inner();
    let form = VisitForm {
        place_id: data.place_id.to_string(),
        visited_on: data.visited_on.to_string(),
        comment: data.comment.to_string(),
    };
    let redisplay = |db: &sqlite::Connections, form: &VisitForm, errors: &FieldErrors| {
        let places = db.shared()?.all_places()?;
        Ok(Err(view::add_history(
            &user.username,
            &places,
            form,
            Some(errors),
        )))
    };
    match form.clone().validate() {
        Ok(new_visit) => {
            let mut db_rw = db.exclusive()?;
            match db_rw.transaction(|db| usecases::record_visit(db, &user.id, new_visit)) {
                Ok(_) => Ok(Ok(Redirect::to(uri!(get_history(page = _))))),
                Err(err) => {
                    warn!("Failed to record visit: {err}");
                    drop(db_rw);
                    let mut errors = FieldErrors::default();
                    errors.add("place_id", "Choose a place.");
                    redisplay(&db, &form, &errors)
                }
            }
        }
        Err(errors) => redisplay(&db, &form, &errors),
    }
}

#[post("/add_history", rank = 2)]
pub fn post_add_history_login_redirect() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[get("/edit")]
pub fn get_edit(
    db: sqlite::Connections,
    account: Account,
    flash: Option<FlashMessage>,
) -> Result<Markup> {
    let user = current_user(&db, &account)?;
    let form = ProfileForm {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        email: user.email.as_str().to_string(),
    };
    Ok(view::edit_profile(&user.username, flash, &form, None))
}

#[get("/edit", rank = 2)]
pub fn get_edit_login_redirect() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[derive(FromForm)]
pub struct ProfileData<'r> {
    first_name: &'r str,
    last_name: &'r str,
    email: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/edit", data = "<data>")]
pub fn post_edit(
    db: sqlite::Connections,
    account: Account,
    data: Form<ProfileData>,
) -> std::result::Result<Flash<Redirect>, Flash<Redirect>> {
    let data = data.into_inner();
    let form = ProfileForm {
        first_name: data.first_name.to_string(),
        last_name: data.last_name.to_string(),
        email: data.email.to_string(),
    };
    let update = match form.validate() {
        Ok(update) => update,
        Err(_) => {
            return Err(Flash::error(
                Redirect::to(uri!(get_edit)),
                "Error updating your profile",
            ));
        }
    };
    let Ok(mut db) = db.exclusive() else {
        return Err(Flash::error(
            Redirect::to(uri!(get_edit)),
            "We are so sorry! An internal server error has occurred. Please try again later.",
        ));
    };
    match db.transaction(|db| usecases::update_profile(db, account.username(), update)) {
        Ok(_) => Ok(Flash::success(
            Redirect::to(uri!(get_edit)),
            "Profile updated successfully",
        )),
        Err(_) => Err(Flash::error(
            Redirect::to(uri!(get_edit)),
            "Error updating your profile",
        )),
    }
}

#[post("/edit", rank = 2)]
pub fn post_edit_login_redirect() -> Redirect {
    Redirect::to(uri!(login::get_login))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::{prelude::*, rocket_test_setup};

    fn setup() -> (Client, sqlite::Connections) {
        rocket_test_setup(vec![("/", super::super::routes())])
    }

    fn login(client: &Client, username: &str, password: &str) {
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body(format!("username={username}&password={password}"))
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
    }

    fn seed_place(pool: &sqlite::Connections, id: &str, name: &str) {
        let db = pool.exclusive().unwrap();
        if db.all_place_types().unwrap().is_empty() {
            db.create_place_type(&PlaceType {
                id: "cafe".into(),
                name: "Café".into(),
            })
            .unwrap();
        }
        db.create_place(&Place {
            id: id.into(),
            name: name.into(),
            description: "A place to eat".into(),
            location: "Main Street 1".into(),
            work_hours: "09:00-17:00".into(),
            image_url: None,
            place_type: "cafe".into(),
            tags: vec![],
        })
        .unwrap();
    }

    #[test]
    fn wishlist_requires_login() {
        let (client, _) = setup();
        let res = client.get("/wishlist").dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
    }

    #[test]
    fn history_requires_login() {
        let (client, _) = setup();
        let res = client.get("/history").dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
    }

    #[test]
    fn wishlist_shows_favourite_places() {
        let (client, pool) = setup();
        seed_place(&pool, "p1", "Soup Corner");
        register_user(&pool, "alice", "secret1");
        login(&client, "alice", "secret1");
        client
            .post("/favourite/p1")
            .header(ContentType::Form)
            .body("restaurant_id=p1")
            .dispatch();
        let res = client.get("/wishlist").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Soup Corner"));
    }

    #[test]
    fn record_a_visit_and_list_it() {
        let (client, pool) = setup();
        seed_place(&pool, "p1", "Soup Corner");
        register_user(&pool, "alice", "secret1");
        login(&client, "alice", "secret1");

        let res = client
            .post("/add_history")
            .header(ContentType::Form)
            .body("place_id=p1&visited_on=2023-07-14&comment=great soup")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/history"));

        let res = client.get("/history").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Soup Corner"));
        assert!(body.contains("2023-07-14"));
        assert!(body.contains("great soup"));
    }

    #[test]
    fn redisplay_the_visit_form_on_invalid_input() {
        let (client, pool) = setup();
        seed_place(&pool, "p1", "Soup Corner");
        register_user(&pool, "alice", "secret1");
        login(&client, "alice", "secret1");

        let res = client
            .post("/add_history")
            .header(ContentType::Form)
            .body("place_id=p1&visited_on=14.07.2023&comment=")
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Please check the data you entered."));
        let db = pool.shared().unwrap();
        let user = db.get_user_by_username("alice").unwrap();
        assert!(db.visits_of_user(user.id.as_str()).unwrap().is_empty());
    }

    #[test]
    fn edit_profile_roundtrip() {
        let (client, pool) = setup();
        register_user(&pool, "alice", "secret1");
        login(&client, "alice", "secret1");

        let res = client
            .post("/edit")
            .header(ContentType::Form)
            .body("first_name=Alice&last_name=Smith&email=alice%40new.org")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/edit"));

        let db = pool.shared().unwrap();
        let user = db.get_user_by_username("alice").unwrap();
        assert_eq!(user.last_name, "Smith");
        assert_eq!(user.email.as_str(), "alice@new.org");
    }

    #[test]
    fn edit_profile_with_invalid_email() {
        let (client, pool) = setup();
        register_user(&pool, "alice", "secret1");
        login(&client, "alice", "secret1");

        let res = client
            .post("/edit")
            .header(ContentType::Form)
            .body("first_name=Alice&last_name=Smith&email=nope")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);

        let db = pool.shared().unwrap();
        let user = db.get_user_by_username("alice").unwrap();
        assert_ne!(user.email.as_str(), "nope");
    }
}
