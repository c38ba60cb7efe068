use maud::Markup;
use rocket::{
    self,
    form::Form,
    get, post,
    request::FlashMessage,
    response::{content::RawCss, Redirect},
    routes, uri, FromForm, Route,
};

use crate::web::{error::Error, guards::*, sqlite};
use fmap_core::{
    repositories::UserRepo,
    usecases::{self, Error as ParameterError},
};

mod account;
mod login;
mod register;
mod view;

type Result<T> = std::result::Result<T, Error>;

const MAIN_CSS: &str = include_str!("main.css");

#[get("/main.css")]
pub fn get_main_css() -> RawCss<&'static str> {
    RawCss(MAIN_CSS)
}

#[get("/?<page>")]
pub fn get_index(
    db: sqlite::Connections,
    account: Option<Account>,
    flash: Option<FlashMessage>,
    page: Option<&str>,
) -> Result<Markup> {
    let news = usecases::list_news(&db.shared()?, page)?;
    Ok(view::news_list(
        account.as_ref().map(Account::username),
        flash,
        &news,
    ))
}

#[get("/news/<id>")]
pub fn get_news_article(
    db: sqlite::Connections,
    id: &str,
    account: Option<Account>,
) -> Result<Markup> {
    let article = usecases::get_news_article(&db.shared()?, id)?;
    Ok(view::news_detail(
        account.as_ref().map(Account::username),
        &article,
    ))
}

#[get("/about")]
pub fn get_about(account: Option<Account>) -> Markup {
    view::about(account.as_ref().map(Account::username))
}

#[get("/places?<page>")]
pub fn get_places(
    db: sqlite::Connections,
    account: Option<Account>,
    page: Option<&str>,
) -> Result<Markup> {
    let listing = usecases::list_places(&db.shared()?, None, page)?;
    Ok(view::places_list(
        account.as_ref().map(Account::username),
        &listing,
    ))
}

#[get("/place/<tag_slug>?<page>")]
pub fn get_places_by_tag(
    db: sqlite::Connections,
    account: Option<Account>,
    tag_slug: &str,
    page: Option<&str>,
) -> Result<Markup> {
    let listing = usecases::list_places(&db.shared()?, Some(tag_slug), page)?;
    Ok(view::places_list(
        account.as_ref().map(Account::username),
        &listing,
    ))
}

#[get("/places/<id>")]
pub fn get_place(db: sqlite::Connections, id: &str, account: Option<Account>) -> Result<Markup> {
    let db = db.shared()?;
    let user = match &account {
        Some(account) => db.try_get_user_by_username(account.username())?,
        None => None,
    };
    let details = usecases::place_details(&db, id, user.as_ref().map(|u| u.id.as_str()))?;
    Ok(view::place_detail(
        user.as_ref().map(|u| u.username.as_str()),
        &details,
    ))
}

#[derive(FromForm)]
pub struct FavouriteAction<'r> {
    restaurant_id: &'r str,
}

#[allow(clippy::result_large_err)]
#[post("/favourite/<id>", data = "<data>")]
pub fn post_favourite(
    db: sqlite::Connections,
    account: Account,
    id: &str,
    data: Form<FavouriteAction>,
) -> Result<Redirect> {
    let user = {
        let db = db.shared()?;
        db.try_get_user_by_username(account.username())?
            .ok_or(ParameterError::Unauthorized)?
    };
    let mut db = db.exclusive()?;
    db.transaction(|db| usecases::toggle_favourite(db, user.id.as_str(), id, data.restaurant_id))?;
    Ok(Redirect::to(uri!(get_place(id))))
}

#[post("/favourite/<_id>", rank = 2)]
pub fn post_favourite_login_redirect(_id: &str) -> Redirect {
    Redirect::to(uri!(login::get_login))
}

pub fn routes() -> Vec<Route> {
    routes![
        get_index,
        get_news_article,
        get_about,
        get_main_css,
        get_places,
        get_places_by_tag,
        get_place,
        post_favourite,
        post_favourite_login_redirect,
        account::get_wishlist,
        account::get_wishlist_login_redirect,
        account::get_history,
        account::get_history_login_redirect,
        account::get_add_history,
        account::get_add_history_login_redirect,
        account::post_add_history,
        account::post_add_history_login_redirect,
        account::get_edit,
        account::get_edit_login_redirect,
        account::post_edit,
        account::post_edit_login_redirect,
        login::get_login,
        login::post_login,
        login::post_logout,
        register::get_register,
        register::post_register,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::tests::{prelude::*, rocket_test_setup};

    fn setup() -> (Client, crate::web::sqlite::Connections) {
        rocket_test_setup(vec![("/", routes())])
    }

    fn seed_places(pool: &crate::web::sqlite::Connections, count: usize) {
        let db = pool.exclusive().unwrap();
        db.create_place_type(&PlaceType {
            id: "cafe".into(),
            name: "Café".into(),
        })
        .unwrap();
        for i in 0..count {
            db.create_place(&Place {
                id: format!("p{i:02}").into(),
                name: format!("Place {i:02}"),
                description: "A place to eat".into(),
                location: "Main Street 1".into(),
                work_hours: "09:00-17:00".into(),
                image_url: None,
                place_type: "cafe".into(),
                tags: if i == 0 {
                    vec!["Street Food".into()]
                } else {
                    vec![]
                },
            })
            .unwrap();
        }
    }

    #[test]
    fn get_places_with_non_numeric_page_token() {
        let (client, pool) = setup();
        seed_places(&pool, 12);
        let res = client.get("/places?page=abc").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Place 00"));
        assert!(body.contains("Place 04"));
        assert!(!body.contains("Place 05"));
    }

    #[test]
    fn get_places_with_out_of_range_page_token() {
        let (client, pool) = setup();
        seed_places(&pool, 12);
        let res = client.get("/places?page=99").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Place 10"));
        assert!(body.contains("Place 11"));
        assert!(!body.contains("Place 09"));
    }

    #[test]
    fn get_places_filtered_by_tag() {
        let (client, pool) = setup();
        seed_places(&pool, 3);
        let res = client.get("/place/street-food").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Place 00"));
        assert!(!body.contains("Place 01"));
    }

    #[test]
    fn get_places_filtered_by_unknown_tag() {
        let (client, pool) = setup();
        seed_places(&pool, 3);
        let res = client.get("/place/no-such-tag").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn get_place_details() {
        let (client, pool) = setup();
        seed_places(&pool, 1);
        {
            let db = pool.exclusive().unwrap();
            db.add_menu_image(&MenuImage {
                id: "m1".into(),
                place_id: "p00".into(),
                image_url: Some("menu/p00.jpg".into()),
            })
            .unwrap();
            db.add_map_location(&MapLocation {
                id: "l1".into(),
                place_id: "p00".into(),
                map_location: "first embed".into(),
            })
            .unwrap();
            db.add_map_location(&MapLocation {
                id: "l2".into(),
                place_id: "p00".into(),
                map_location: "second embed".into(),
            })
            .unwrap();
        }
        let res = client.get("/places/p00").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Place 00"));
        assert!(body.contains("menu/p00.jpg"));
        // Only the most recently added map location is shown.
        assert!(body.contains("second embed"));
        assert!(!body.contains("first embed"));
    }

    #[test]
    fn get_place_details_of_unknown_place() {
        let (client, _) = setup();
        let res = client.get("/places/nope").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn get_news_article_of_unknown_id() {
        let (client, _) = setup();
        let res = client.get("/news/nope").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn get_index_lists_news() {
        let (client, pool) = setup();
        {
            let db = pool.exclusive().unwrap();
            db.create_news_article(&NewsArticle {
                id: "n1".into(),
                title: "Soup Corner opened".into(),
                body: "A new place for soup lovers.".into(),
                published_at: Timestamp::now(),
                image_url: None,
            })
            .unwrap();
        }
        let res = client.get("/").dispatch();
        assert_eq!(res.status(), Status::Ok);
        let body = res.into_string().unwrap();
        assert!(body.contains("Soup Corner opened"));
    }

    #[test]
    fn toggle_favourite_roundtrip() {
        let (client, pool) = setup();
        seed_places(&pool, 1);
        register_user(&pool, "alice", "secret1");
        let res = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=alice&password=secret1")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);

        let res = client
            .post("/favourite/p00")
            .header(ContentType::Form)
            .body("restaurant_id=p00")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        let user_id = {
            let db = pool.shared().unwrap();
            let user = db.get_user_by_username("alice").unwrap();
            assert!(db.is_favourite(user.id.as_str(), "p00").unwrap());
            user.id
        };

        // The same POST again removes the place from the wishlist.
        let res = client
            .post("/favourite/p00")
            .header(ContentType::Form)
            .body("restaurant_id=p00")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        let db = pool.shared().unwrap();
        assert!(!db.is_favourite(user_id.as_str(), "p00").unwrap());
    }

    #[test]
    fn toggle_favourite_with_mismatching_ids() {
        let (client, pool) = setup();
        seed_places(&pool, 2);
        register_user(&pool, "alice", "secret1");
        client
            .post("/login")
            .header(ContentType::Form)
            .body("username=alice&password=secret1")
            .dispatch();
        let res = client
            .post("/favourite/p00")
            .header(ContentType::Form)
            .body("restaurant_id=p01")
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let db = pool.shared().unwrap();
        let user = db.get_user_by_username("alice").unwrap();
        assert!(!db.is_favourite(user.id.as_str(), "p00").unwrap());
        assert!(!db.is_favourite(user.id.as_str(), "p01").unwrap());
    }

    #[test]
    fn toggle_favourite_requires_login() {
        let (client, pool) = setup();
        seed_places(&pool, 1);
        let res = client
            .post("/favourite/p00")
            .header(ContentType::Form)
            .body("restaurant_id=p00")
            .dispatch();
        assert_eq!(res.status(), Status::SeeOther);
        assert_eq!(res.headers().get_one("Location"), Some("/login"));
    }
}
