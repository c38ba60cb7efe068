// NOTE:
// The repositories speak public string ids. Internal integer
// rowids never cross this boundary, they are resolved on the
// fly where relationships are traversed.

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use fmap_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod favourite;
mod map_location;
mod menu;
mod news;
mod place;
mod place_type;
mod tag;
mod user;
mod visit;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            repo::Error::StillReferenced
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn resolve_place_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::places::dsl;
    dsl::places
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_place_type_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::place_types::dsl;
    dsl::place_types
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    dsl::users
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)
}

fn load_place_tag_labels(conn: &mut SqliteConnection, place_rowid: i64) -> Result<Vec<String>> {
    use schema::{place_tags, tags};
    place_tags::table
        .inner_join(tags::table)
        .filter(place_tags::dsl::place_rowid.eq(place_rowid))
        .order_by(tags::dsl::slug)
        .select(tags::dsl::label)
        .load::<String>(conn)
        .map_err(from_diesel_err)
}

fn load_visit_date(s: &str) -> Result<Date> {
    parse_date(s).map_err(|_| anyhow!("Malformed visit date in database: {s}").into())
}
