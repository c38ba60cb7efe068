use super::*;

impl<'a> MapLocationRepo for DbReadOnly<'a> {
    fn add_map_location(&self, _location: &MapLocation) -> Result<()> {
        unreachable!();
    }
    fn newest_map_location_of_place(&self, place_id: &str) -> Result<Option<MapLocation>> {
        newest_map_location_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> MapLocationRepo for DbReadWrite<'a> {
    fn add_map_location(&self, location: &MapLocation) -> Result<()> {
        add_map_location(&mut self.conn.borrow_mut(), location)
    }
    fn newest_map_location_of_place(&self, place_id: &str) -> Result<Option<MapLocation>> {
        newest_map_location_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

impl<'a> MapLocationRepo for DbConnection<'a> {
    fn add_map_location(&self, location: &MapLocation) -> Result<()> {
        add_map_location(&mut self.conn.borrow_mut(), location)
    }
    fn newest_map_location_of_place(&self, place_id: &str) -> Result<Option<MapLocation>> {
        newest_map_location_of_place(&mut self.conn.borrow_mut(), place_id)
    }
}

fn add_map_location(conn: &mut SqliteConnection, location: &MapLocation) -> Result<()> {
    let place_rowid = resolve_place_rowid(conn, location.place_id.as_str())?;
    let new_location = models::NewMapLocation {
        id: location.id.as_str(),
        place_rowid,
        map_location: &location.map_location,
    };
    diesel::insert_into(schema::map_locations::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn newest_map_location_of_place(
    conn: &mut SqliteConnection,
    place_id: &str,
) -> Result<Option<MapLocation>> {
    use schema::{map_locations, places};
    Ok(map_locations::table
        .inner_join(places::table)
        .filter(places::dsl::id.eq(place_id))
        .order_by(map_locations::dsl::rowid.desc())
        .select((
            map_locations::dsl::rowid,
            map_locations::dsl::id,
            map_locations::dsl::map_location,
            places::dsl::id,
        ))
        .first::<models::JoinedMapLocation>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
