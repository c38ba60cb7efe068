use super::*;

impl<'a> TagRepo for DbReadOnly<'a> {
    fn create_tag_if_it_does_not_exist(&self, _tag: &Tag) -> Result<()> {
        unreachable!();
    }
    fn resolve_tag(&self, slug: &str) -> Result<Tag> {
        resolve_tag(&mut self.conn.borrow_mut(), slug)
    }
    fn tags_of_place(&self, place_id: &str) -> Result<Vec<Tag>> {
        tags_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl<'a> TagRepo for DbReadWrite<'a> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn resolve_tag(&self, slug: &str) -> Result<Tag> {
        resolve_tag(&mut self.conn.borrow_mut(), slug)
    }
    fn tags_of_place(&self, place_id: &str) -> Result<Vec<Tag>> {
        tags_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

impl<'a> TagRepo for DbConnection<'a> {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()> {
        create_tag_if_it_does_not_exist(&mut self.conn.borrow_mut(), tag)
    }
    fn resolve_tag(&self, slug: &str) -> Result<Tag> {
        resolve_tag(&mut self.conn.borrow_mut(), slug)
    }
    fn tags_of_place(&self, place_id: &str) -> Result<Vec<Tag>> {
        tags_of_place(&mut self.conn.borrow_mut(), place_id)
    }
    fn all_tags(&self) -> Result<Vec<Tag>> {
        all_tags(&mut self.conn.borrow_mut())
    }
    fn count_tags(&self) -> Result<usize> {
        count_tags(&mut self.conn.borrow_mut())
    }
}

fn create_tag_if_it_does_not_exist(conn: &mut SqliteConnection, tag: &Tag) -> Result<()> {
    let res = diesel::insert_into(schema::tags::table)
        .values(&models::NewTag {
            slug: &tag.slug,
            label: &tag.label,
        })
        .execute(conn);
    if let Err(err) = res {
        match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                // that's ok :)
            }
            _ => {
                return Err(from_diesel_err(err));
            }
        }
    }
    Ok(())
}

fn resolve_tag(conn: &mut SqliteConnection, slug: &str) -> Result<Tag> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .filter(dsl::slug.eq(slug))
        .first::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn tags_of_place(conn: &mut SqliteConnection, place_id: &str) -> Result<Vec<Tag>> {
    use schema::{place_tags, tags};
    let place_rowid = resolve_place_rowid(conn, place_id)?;
    Ok(place_tags::table
        .inner_join(tags::table)
        .filter(place_tags::dsl::place_rowid.eq(place_rowid))
        .order_by(tags::dsl::slug)
        .select((tags::dsl::slug, tags::dsl::label))
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn all_tags(conn: &mut SqliteConnection) -> Result<Vec<Tag>> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .order_by(dsl::slug)
        .load::<models::TagEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_tags(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::tags::dsl;
    Ok(dsl::tags
        .select(diesel::dsl::count(dsl::slug))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
