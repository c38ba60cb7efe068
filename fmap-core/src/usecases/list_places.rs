use super::prelude::*;

#[derive(Debug)]
pub struct PlaceListing {
    pub page: Page<Place>,
    /// The resolved tag if the listing was filtered.
    pub tag: Option<Tag>,
}

pub fn list_places<R>(
    repo: &R,
    tag_slug: Option<&str>,
    page_token: Option<&str>,
) -> Result<PlaceListing>
where
    R: PlaceRepo + TagRepo,
{
    let (places, tag) = match tag_slug {
        None => (repo.all_places()?, None),
        Some(slug) => {
            // An unknown slug is a not-found condition, a known
            // slug without places is an empty listing.
            let tag = repo.resolve_tag(slug)?;
            (repo.places_with_tag(slug)?, Some(tag))
        }
    };
    Ok(PlaceListing {
        page: paginate(places, LISTING_PAGE_SIZE, page_token),
        tag,
    })
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;

    #[test]
    fn filter_by_known_tag() {
        let db = MockDb::default();
        db.tags.borrow_mut().push(Tag {
            label: "Street Food".into(),
            slug: "street-food".into(),
        });
        db.places.borrow_mut().push(MockDb::place("1", "Soup Corner", &["Street Food"]));
        db.places.borrow_mut().push(MockDb::place("2", "La Pizzeria", &[]));

        let listing = list_places(&db, Some("street-food"), None).unwrap();
        assert_eq!(listing.tag.as_ref().unwrap().label, "Street Food");
        assert_eq!(listing.page.items.len(), 1);
        assert_eq!(listing.page.items[0].name, "Soup Corner");
    }

    #[test]
    fn known_tag_without_places_yields_an_empty_page() {
        let db = MockDb::default();
        db.tags.borrow_mut().push(Tag {
            label: "Sushi".into(),
            slug: "sushi".into(),
        });
        let listing = list_places(&db, Some("sushi"), None).unwrap();
        assert!(listing.page.items.is_empty());
        assert_eq!(listing.page.page_count, 1);
    }

    #[test]
    fn unknown_tag_is_not_found() {
        let db = MockDb::default();
        let err = list_places(&db, Some("no-such-tag"), None).unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::NotFound)));
    }

    #[test]
    fn out_of_range_page_token_yields_the_last_page() {
        let db = MockDb::default();
        for i in 0..12 {
            db.places
                .borrow_mut()
                .push(MockDb::place(&i.to_string(), &format!("Place {i}"), &[]));
        }
        let listing = list_places(&db, None, Some("99")).unwrap();
        assert_eq!(listing.page.number, 3);
        assert_eq!(listing.page.items.len(), 2);
        assert_eq!(listing.page.items[0].name, "Place 10");
    }

    #[test]
    fn non_numeric_page_token_yields_the_first_page() {
        let db = MockDb::default();
        for i in 0..12 {
            db.places
                .borrow_mut()
                .push(MockDb::place(&i.to_string(), &format!("Place {i}"), &[]));
        }
        let listing = list_places(&db, None, Some("abc")).unwrap();
        assert_eq!(listing.page.number, 1);
        assert_eq!(listing.page.items.len(), 5);
        assert_eq!(listing.page.items[0].name, "Place 0");
    }
}
