use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{self, sqlite};
use fmap_core::usecases;

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Cookie, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::register_user;

    pub use fmap_core::{entities::*, repositories::*};
}

pub fn rocket_test_setup(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let connections = fmap_db_sqlite::Connections::init(":memory:", 1).unwrap();
    fmap_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap());
    let db = sqlite::Connections::from(connections);
    let options = web::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
    };
    let rocket = web::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

pub fn register_user(pool: &sqlite::Connections, username: &str, pw: &str) {
    let db = pool.exclusive().unwrap();
    usecases::create_new_user(
        &db,
        usecases::NewUser {
            username: username.to_string(),
            first_name: "Test".into(),
            email: format!("{username}@example.org").parse().unwrap(),
            password: pw.to_string(),
        },
    )
    .unwrap();
}
