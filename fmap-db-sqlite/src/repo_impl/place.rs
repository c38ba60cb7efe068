use fmap_core::util::slug::slugify;

use super::*;

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn update_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn delete_place(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_with_tag(&self, tag_slug: &str) -> Result<Vec<Place>> {
        places_with_tag(&mut self.conn.borrow_mut(), tag_slug)
    }
}

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &str) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_with_tag(&self, tag_slug: &str) -> Result<Vec<Place>> {
        places_with_tag(&mut self.conn.borrow_mut(), tag_slug)
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }
    fn delete_place(&self, id: &str) -> Result<()> {
        delete_place(&mut self.conn.borrow_mut(), id)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn all_places(&self) -> Result<Vec<Place>> {
        all_places(&mut self.conn.borrow_mut())
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }
    fn places_with_tag(&self, tag_slug: &str) -> Result<Vec<Place>> {
        places_with_tag(&mut self.conn.borrow_mut(), tag_slug)
    }
}

fn place_from_joined(joined: models::JoinedPlace, tags: Vec<String>) -> Place {
    let models::JoinedPlace {
        rowid: _,
        id,
        name,
        description,
        location,
        work_hours,
        image_url,
        place_type_id,
    } = joined;
    Place {
        id: id.into(),
        name,
        description,
        location,
        work_hours,
        image_url,
        place_type: place_type_id.into(),
        tags,
    }
}

fn create_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let place_type_rowid = resolve_place_type_rowid(conn, place.place_type.as_str())?;
    let new_place = models::NewPlace {
        id: place.id.as_str(),
        name: &place.name,
        description: &place.description,
        location: &place.location,
        work_hours: &place.work_hours,
        image_url: place.image_url.as_deref(),
        place_type_rowid,
    };
    diesel::insert_into(schema::places::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = resolve_place_rowid(conn, place.id.as_str())?;
    replace_place_tags(conn, rowid, &place.tags)
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let place_type_rowid = resolve_place_type_rowid(conn, place.place_type.as_str())?;
    let changeset = models::NewPlace {
        id: place.id.as_str(),
        name: &place.name,
        description: &place.description,
        location: &place.location,
        work_hours: &place.work_hours,
        image_url: place.image_url.as_deref(),
        place_type_rowid,
    };
    let count = diesel::update(dsl::places.filter(dsl::id.eq(place.id.as_str())))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    let rowid = resolve_place_rowid(conn, place.id.as_str())?;
    replace_place_tags(conn, rowid, &place.tags)
}

fn delete_place(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::places::dsl;
    // Menu images, map locations, tag associations and favourites
    // are dropped by cascading deletes. Referencing visit records
    // block the deletion.
    let count = diesel::delete(dsl::places.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn replace_place_tags(conn: &mut SqliteConnection, place_rowid: i64, labels: &[String]) -> Result<()> {
    use schema::place_tags::dsl;
    diesel::delete(dsl::place_tags.filter(dsl::place_rowid.eq(place_rowid)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    for label in labels {
        let slug = slugify(label);
        if slug.is_empty() {
            continue;
        }
        diesel::insert_into(schema::tags::table)
            .values(&models::NewTag { slug: &slug, label })
            .on_conflict_do_nothing()
            .execute(conn)
            .map_err(from_diesel_err)?;
        diesel::insert_into(schema::place_tags::table)
            .values(&models::NewPlaceTag {
                place_rowid,
                tag_slug: &slug,
            })
            .on_conflict_do_nothing()
            .execute(conn)
            .map_err(from_diesel_err)?;
    }
    Ok(())
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::{place_types, places};
    let joined = places::table
        .inner_join(place_types::table)
        .filter(places::dsl::id.eq(id))
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
        .first::<models::JoinedPlace>(conn)
        .map_err(from_diesel_err)?;
    let tags = load_place_tag_labels(conn, joined.rowid)?;
    Ok(place_from_joined(joined, tags))
}

fn all_places(conn: &mut SqliteConnection) -> Result<Vec<Place>> {
    use schema::{place_types, places};
    let joined = places::table
        .inner_join(place_types::table)
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
    let mut places = Vec::with_capacity(joined.len());
    for row in joined {
        let tags = load_place_tag_labels(conn, row.rowid)?;
        places.push(place_from_joined(row, tags));
    }
    Ok(places)
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn places_with_tag(conn: &mut SqliteConnection, tag_slug: &str) -> Result<Vec<Place>> {
    use schema::{place_tags, place_types, places};
    let joined = places::table
        .inner_join(place_types::table)
        .inner_join(place_tags::table)
        .filter(place_tags::dsl::tag_slug.eq(tag_slug))
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
    let mut places = Vec::with_capacity(joined.len());
    for row in joined {
        let tags = load_place_tag_labels(conn, row.rowid)?;
        places.push(place_from_joined(row, tags));
    }
    Ok(places)
}
