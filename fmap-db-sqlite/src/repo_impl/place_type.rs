use super::*;

impl<'a> PlaceTypeRepo for DbReadOnly<'a> {
    fn create_place_type(&self, _place_type: &PlaceType) -> Result<()> {
        unreachable!();
    }
    fn delete_place_type(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_place_type(&self, id: &str) -> Result<PlaceType> {
        get_place_type(&mut self.conn.borrow_mut(), id)
    }
    fn all_place_types(&self) -> Result<Vec<PlaceType>> {
        all_place_types(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceTypeRepo for DbReadWrite<'a> {
    fn create_place_type(&self, place_type: &PlaceType) -> Result<()> {
        create_place_type(&mut self.conn.borrow_mut(), place_type)
    }
    fn delete_place_type(&self, id: &str) -> Result<()> {
        delete_place_type(&mut self.conn.borrow_mut(), id)
    }

    fn get_place_type(&self, id: &str) -> Result<PlaceType> {
        get_place_type(&mut self.conn.borrow_mut(), id)
    }
    fn all_place_types(&self) -> Result<Vec<PlaceType>> {
        all_place_types(&mut self.conn.borrow_mut())
    }
}

impl<'a> PlaceTypeRepo for DbConnection<'a> {
    fn create_place_type(&self, place_type: &PlaceType) -> Result<()> {
        create_place_type(&mut self.conn.borrow_mut(), place_type)
    }
    fn delete_place_type(&self, id: &str) -> Result<()> {
        delete_place_type(&mut self.conn.borrow_mut(), id)
    }

    fn get_place_type(&self, id: &str) -> Result<PlaceType> {
        get_place_type(&mut self.conn.borrow_mut(), id)
    }
    fn all_place_types(&self) -> Result<Vec<PlaceType>> {
        all_place_types(&mut self.conn.borrow_mut())
    }
}

fn create_place_type(conn: &mut SqliteConnection, place_type: &PlaceType) -> Result<()> {
    let new_place_type = models::NewPlaceType {
        id: place_type.id.as_str(),
        name: &place_type.name,
    };
    diesel::insert_into(schema::place_types::table)
        .values(&new_place_type)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn delete_place_type(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::place_types::dsl;
    // Deletion is blocked by the foreign key constraint while
    // any place still references the type.
    let count = diesel::delete(dsl::place_types.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_place_type(conn: &mut SqliteConnection, id: &str) -> Result<PlaceType> {
    use schema::place_types::dsl;
    Ok(dsl::place_types
        .filter(dsl::id.eq(id))
        .first::<models::PlaceTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_place_types(conn: &mut SqliteConnection) -> Result<Vec<PlaceType>> {
    use schema::place_types::dsl;
    Ok(dsl::place_types
        .order_by(dsl::rowid)
        .load::<models::PlaceTypeEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
