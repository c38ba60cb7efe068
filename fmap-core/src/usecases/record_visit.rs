use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewVisit {
    pub place_id: Id,
    pub visited_on: Date,
    pub comment: Option<String>,
}

pub fn record_visit<R>(repo: &R, user_id: &Id, visit: NewVisit) -> Result<VisitRecord>
where
    R: VisitRepo + PlaceRepo,
{
    let NewVisit {
        place_id,
        visited_on,
        comment,
    } = visit;
    // The place must exist before a visit can reference it.
    repo.get_place(place_id.as_str())?;
    let record = VisitRecord {
        id: Id::new(),
        user_id: Some(user_id.clone()),
        visited_on,
        place_id,
        comment,
    };
    log::debug!(
        "Recording visit of user {} to place {}",
        user_id,
        record.place_id
    );
    repo.create_visit(&record)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;

    fn visit(place_id: &str) -> NewVisit {
        NewVisit {
            place_id: place_id.into(),
            visited_on: parse_date("2023-07-14").unwrap(),
            comment: Some("great soup".into()),
        }
    }

    #[test]
    fn record_a_visit() {
        let db = MockDb::default();
        db.places.borrow_mut().push(MockDb::place("7", "Soup Corner", &[]));
        let record = record_visit(&db, &Id::from("u1"), visit("7")).unwrap();
        assert_eq!(record.user_id, Some(Id::from("u1")));
        assert_eq!(db.visits.borrow().len(), 1);
    }

    #[test]
    fn reject_a_visit_to_an_unknown_place() {
        let db = MockDb::default();
        let err = record_visit(&db, &Id::from("u1"), visit("7")).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
        assert!(db.visits.borrow().is_empty());
    }
}
