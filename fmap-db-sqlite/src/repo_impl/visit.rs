use super::*;

impl<'a> VisitRepo for DbReadOnly<'a> {
    fn create_visit(&self, _visit: &VisitRecord) -> Result<()> {
        unreachable!();
    }
    fn visits_of_user(&self, user_id: &str) -> Result<Vec<VisitRecord>> {
        visits_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> VisitRepo for DbReadWrite<'a> {
    fn create_visit(&self, visit: &VisitRecord) -> Result<()> {
        create_visit(&mut self.conn.borrow_mut(), visit)
    }
    fn visits_of_user(&self, user_id: &str) -> Result<Vec<VisitRecord>> {
        visits_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> VisitRepo for DbConnection<'a> {
    fn create_visit(&self, visit: &VisitRecord) -> Result<()> {
        create_visit(&mut self.conn.borrow_mut(), visit)
    }
    fn visits_of_user(&self, user_id: &str) -> Result<Vec<VisitRecord>> {
        visits_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_visit(conn: &mut SqliteConnection, visit: &VisitRecord) -> Result<()> {
    let place_rowid = resolve_place_rowid(conn, visit.place_id.as_str())?;
    let user_rowid = visit
        .user_id
        .as_ref()
        .map(|id| resolve_user_rowid(conn, id.as_str()))
        .transpose()?;
    let visited_on = format_date(visit.visited_on);
    let new_visit = models::NewVisit {
        id: visit.id.as_str(),
        user_rowid,
        place_rowid,
        visited_on: &visited_on,
        comment: visit.comment.as_deref(),
    };
    diesel::insert_into(schema::visits::table)
        .values(&new_visit)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn visits_of_user(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<VisitRecord>> {
    use schema::{places, visits};
    let user_rowid = resolve_user_rowid(conn, user_id)?;
    let rows = visits::table
        .inner_join(places::table)
        .filter(visits::dsl::user_rowid.eq(Some(user_rowid)))
        .order_by(visits::dsl::rowid)
        .select((
            visits::dsl::rowid,
            visits::dsl::id,
            visits::dsl::visited_on,
            visits::dsl::comment,
            places::dsl::id,
        ))
        .load::<models::JoinedVisit>(conn)
        .map_err(from_diesel_err)?;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let models::JoinedVisit {
            rowid: _,
            id,
            visited_on,
            comment,
            place_id,
        } = row;
        records.push(VisitRecord {
            id: id.into(),
            user_id: Some(user_id.into()),
            visited_on: load_visit_date(&visited_on)?,
            place_id: place_id.into(),
            comment,
        });
    }
    Ok(records)
}
