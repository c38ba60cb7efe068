use super::*;

impl<'a> FavouriteRepo for DbReadOnly<'a> {
    fn is_favourite(&self, user_id: &str, place_id: &str) -> Result<bool> {
        is_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn add_favourite(&self, _user_id: &str, _place_id: &str) -> Result<()> {
        unreachable!();
    }
    fn remove_favourite(&self, _user_id: &str, _place_id: &str) -> Result<()> {
        unreachable!();
    }
    fn favourite_places_of_user(&self, user_id: &str) -> Result<Vec<Place>> {
        favourite_places_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavouriteRepo for DbReadWrite<'a> {
    fn is_favourite(&self, user_id: &str, place_id: &str) -> Result<bool> {
        is_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn add_favourite(&self, user_id: &str, place_id: &str) -> Result<()> {
        add_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn remove_favourite(&self, user_id: &str, place_id: &str) -> Result<()> {
        remove_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn favourite_places_of_user(&self, user_id: &str) -> Result<Vec<Place>> {
        favourite_places_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavouriteRepo for DbConnection<'a> {
    fn is_favourite(&self, user_id: &str, place_id: &str) -> Result<bool> {
        is_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn add_favourite(&self, user_id: &str, place_id: &str) -> Result<()> {
        add_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn remove_favourite(&self, user_id: &str, place_id: &str) -> Result<()> {
        remove_favourite(&mut self.conn.borrow_mut(), user_id, place_id)
    }
    fn favourite_places_of_user(&self, user_id: &str) -> Result<Vec<Place>> {
        favourite_places_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn is_favourite(conn: &mut SqliteConnection, user_id: &str, place_id: &str) -> Result<bool> {
    use schema::favourites::dsl;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let place_rowid = resolve_place_rowid(conn, place_id)?;
    let count = dsl::favourites
        .filter(dsl::user_rowid.eq(user_rowid))
        .filter(dsl::place_rowid.eq(place_rowid))
        .select(diesel::dsl::count(dsl::place_rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count > 0)
}

fn add_favourite(conn: &mut SqliteConnection, user_id: &str, place_id: &str) -> Result<()> {
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let place_rowid = resolve_place_rowid(conn, place_id)?;
    diesel::insert_into(schema::favourites::table)
        .values(&models::NewFavourite {
            user_rowid,
            place_rowid,
        })
        .on_conflict_do_nothing()
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn remove_favourite(conn: &mut SqliteConnection, user_id: &str, place_id: &str) -> Result<()> {
    use schema::favourites::dsl;
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let place_rowid = resolve_place_rowid(conn, place_id)?;
    diesel::delete(
        dsl::favourites
            .filter(dsl::user_rowid.eq(user_rowid))
            .filter(dsl::place_rowid.eq(place_rowid)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(())
}

fn favourite_places_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Place>> {
    use schema::{favourites, place_types, places};
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let joined = favourites::table
        .inner_join(places::table.inner_join(place_types::table))
        .filter(favourites::dsl::user_rowid.eq(user_rowid))
        .order_by(places::dsl::rowid)
        .select((
            places::dsl::rowid,
            places::dsl::id,
            places::dsl::name,
            places::dsl::description,
            places::dsl::location,
            places::dsl::work_hours,
            places::dsl::image_url,
            place_types::dsl::id,
        ))
        .load::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?;
    let mut result = Vec::with_capacity(joined.len());
    for row in joined {
        let tags = load_place_tag_labels(conn, row.rowid)?;
        let models::JoinedPlace {
            rowid: _,
            id,
            name,
            description,
            location,
            work_hours,
            image_url,
            place_type_id,
        } = row;
        result.push(Place {
            id: id.into(),
            name,
            description,
            location,
            work_hours,
            image_url,
            place_type: place_type_id.into(),
            tags,
        });
    }
    Ok(result)
}
