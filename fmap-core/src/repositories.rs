// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The object is still referenced by another object")]
    StillReferenced,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    // Creating or updating a place also replaces its
    // set of tag associations.
    fn create_place(&self, place: &Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;
    fn delete_place(&self, id: &str) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;

    // In insertion order.
    fn all_places(&self) -> Result<Vec<Place>>;
    fn count_places(&self) -> Result<usize>;

    // Places carrying the tag with the given slug, in insertion order.
    // An unknown slug yields an empty list, not an error.
    fn places_with_tag(&self, tag_slug: &str) -> Result<Vec<Place>>;
}

pub trait PlaceTypeRepo {
    fn create_place_type(&self, place_type: &PlaceType) -> Result<()>;

    // Fails with `Error::StillReferenced` while any place uses the type.
    fn delete_place_type(&self, id: &str) -> Result<()>;

    fn get_place_type(&self, id: &str) -> Result<PlaceType>;
    fn all_place_types(&self) -> Result<Vec<PlaceType>>;
}

pub trait MenuRepo {
    fn add_menu_image(&self, image: &MenuImage) -> Result<()>;

    // In insertion order.
    fn menu_images_of_place(&self, place_id: &str) -> Result<Vec<MenuImage>>;
}

pub trait MapLocationRepo {
    fn add_map_location(&self, location: &MapLocation) -> Result<()>;

    // The most recently added location of the place, if any.
    fn newest_map_location_of_place(&self, place_id: &str) -> Result<Option<MapLocation>>;
}

pub trait NewsRepo {
    fn create_news_article(&self, article: &NewsArticle) -> Result<()>;

    // `published_at` is immutable and must not be touched by updates.
    fn update_news_article(&self, article: &NewsArticle) -> Result<()>;

    fn get_news_article(&self, id: &str) -> Result<NewsArticle>;

    // In insertion order.
    fn all_news_articles(&self) -> Result<Vec<NewsArticle>>;
    fn count_news_articles(&self) -> Result<usize>;
}

pub trait VisitRepo {
    fn create_visit(&self, visit: &VisitRecord) -> Result<()>;

    // In insertion order.
    fn visits_of_user(&self, user_id: &str) -> Result<Vec<VisitRecord>>;
}

pub trait FavouriteRepo {
    fn is_favourite(&self, user_id: &str, place_id: &str) -> Result<bool>;
    fn add_favourite(&self, user_id: &str, place_id: &str) -> Result<()>;
    fn remove_favourite(&self, user_id: &str, place_id: &str) -> Result<()>;

    // The user's wishlist in insertion order.
    fn favourite_places_of_user(&self, user_id: &str) -> Result<Vec<Place>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    // Visit records of the removed account stay behind
    // with an empty owner.
    fn delete_user_by_username(&self, username: &str) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user_by_username(&self, username: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
}

pub trait TagRepo {
    fn create_tag_if_it_does_not_exist(&self, tag: &Tag) -> Result<()>;

    // Resolves a tag by its slug.
    fn resolve_tag(&self, slug: &str) -> Result<Tag>;

    fn tags_of_place(&self, place_id: &str) -> Result<Vec<Tag>>;

    fn all_tags(&self) -> Result<Vec<Tag>>;
    fn count_tags(&self) -> Result<usize>;
}
