use super::prelude::*;

/// Everything the place detail view needs.
#[derive(Debug)]
pub struct PlaceDetails {
    pub place: Place,
    pub place_type: PlaceType,
    pub tags: Vec<Tag>,
    pub menu_images: Vec<MenuImage>,
    /// The most recently added map location, if any.
    pub map_location: Option<MapLocation>,
    /// Whether the current user has wishlisted this place.
    /// Always `false` for anonymous visitors.
    pub is_favourite: bool,
}

pub fn place_details<R>(repo: &R, place_id: &str, user_id: Option<&str>) -> Result<PlaceDetails>
where
    R: PlaceRepo + PlaceTypeRepo + TagRepo + MenuRepo + MapLocationRepo + FavouriteRepo,
{
    let place = repo.get_place(place_id)?;
    let place_type = repo.get_place_type(place.place_type.as_str())?;
    let tags = repo.tags_of_place(place_id)?;
    let menu_images = repo.menu_images_of_place(place_id)?;
    let map_location = repo.newest_map_location_of_place(place_id)?;
    let is_favourite = match user_id {
        Some(user_id) => repo.is_favourite(user_id, place_id)?,
        None => false,
    };
    Ok(PlaceDetails {
        place,
        place_type,
        tags,
        menu_images,
        map_location,
        is_favourite,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;

    #[test]
    fn unknown_place_is_not_found() {
        let db = MockDb::default();
        let err = place_details(&db, "nope", None).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }

    #[test]
    fn detail_context_for_anonymous_visitor() {
        let db = MockDb::default();
        db.place_types.borrow_mut().push(PlaceType {
            id: "cafe".into(),
            name: "Café".into(),
        });
        db.places.borrow_mut().push(MockDb::place("1", "Soup Corner", &[]));
        db.menu_images.borrow_mut().push(MenuImage {
            id: "m1".into(),
            place_id: "1".into(),
            image_url: Some("menu/soup.jpg".into()),
        });
        let details = place_details(&db, "1", None).unwrap();
        assert_eq!(details.place.name, "Soup Corner");
        assert_eq!(details.menu_images.len(), 1);
        assert!(details.map_location.is_none());
        assert!(!details.is_favourite);
    }

    #[test]
    fn newest_of_multiple_map_locations_wins() {
        let db = MockDb::default();
        db.place_types.borrow_mut().push(PlaceType {
            id: "cafe".into(),
            name: "Café".into(),
        });
        db.places.borrow_mut().push(MockDb::place("1", "Soup Corner", &[]));
        for (id, markup) in [("l1", "old embed"), ("l2", "new embed")] {
            db.map_locations.borrow_mut().push(MapLocation {
                id: id.into(),
                place_id: "1".into(),
                map_location: markup.into(),
            });
        }
        let details = place_details(&db, "1", None).unwrap();
        assert_eq!(details.map_location.unwrap().map_location, "new embed");
    }

    #[test]
    fn favourite_state_of_the_current_user() {
        let db = MockDb::default();
        db.place_types.borrow_mut().push(PlaceType {
            id: "cafe".into(),
            name: "Café".into(),
        });
        db.places.borrow_mut().push(MockDb::place("1", "Soup Corner", &[]));
        db.favourites.borrow_mut().push(("u1".into(), "1".into()));
        assert!(place_details(&db, "1", Some("u1")).unwrap().is_favourite);
        assert!(!place_details(&db, "1", Some("u2")).unwrap().is_favourite);
    }
}
