#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// The `published_at` timestamp is stored as unix timestamp
// in seconds. Visit dates are stored as ISO `YYYY-MM-DD` text.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = place_types)]
pub struct NewPlaceType<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct PlaceTypeEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places)]
pub struct NewPlace<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub work_hours: &'a str,
    pub image_url: Option<&'a str>,
    pub place_type_rowid: i64,
}

#[derive(Queryable)]
pub struct JoinedPlace {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub work_hours: String,
    pub image_url: Option<String>,
    // Joined column
    pub place_type_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = place_tags)]
pub struct NewPlaceTag<'a> {
    pub place_rowid: i64,
    pub tag_slug: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = tags)]
pub struct NewTag<'a> {
    pub slug: &'a str,
    pub label: &'a str,
}

#[derive(Queryable)]
pub struct TagEntity {
    pub slug: String,
    pub label: String,
}

#[derive(Insertable)]
#[diesel(table_name = menu_images)]
pub struct NewMenuImage<'a> {
    pub id: &'a str,
    pub place_rowid: i64,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedMenuImage {
    pub rowid: i64,
    pub id: String,
    pub image_url: Option<String>,
    // Joined column
    pub place_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = map_locations)]
pub struct NewMapLocation<'a> {
    pub id: &'a str,
    pub place_rowid: i64,
    pub map_location: &'a str,
}

#[derive(Queryable)]
pub struct JoinedMapLocation {
    pub rowid: i64,
    pub id: String,
    pub map_location: String,
    // Joined column
    pub place_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = news_articles)]
pub struct NewNewsArticle<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub published_at: i64,
    pub image_url: Option<&'a str>,
}

// Changeset for updates: the publication date is immutable
// and deliberately absent.
#[derive(AsChangeset)]
#[diesel(table_name = news_articles)]
pub struct NewsArticleChangeset<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable)]
pub struct NewsArticleEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub body: String,
    pub published_at: i64,
    pub image_url: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Insertable)]
#[diesel(table_name = visits)]
pub struct NewVisit<'a> {
    pub id: &'a str,
    pub user_rowid: Option<i64>,
    pub place_rowid: i64,
    pub visited_on: &'a str,
    pub comment: Option<&'a str>,
}

#[derive(Queryable)]
pub struct JoinedVisit {
    pub rowid: i64,
    pub id: String,
    pub visited_on: String,
    pub comment: Option<String>,
    // Joined column
    pub place_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = favourites)]
pub struct NewFavourite {
    pub user_rowid: i64,
    pub place_rowid: i64,
}

use fmap_core::entities::{
    EmailAddress, MapLocation, MenuImage, NewsArticle, Password, PlaceType, Tag, Timestamp, User,
};

impl From<PlaceTypeEntity> for PlaceType {
    fn from(from: PlaceTypeEntity) -> Self {
        let PlaceTypeEntity { rowid: _, id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<TagEntity> for Tag {
    fn from(from: TagEntity) -> Self {
        let TagEntity { slug, label } = from;
        Self { label, slug }
    }
}

impl From<JoinedMenuImage> for MenuImage {
    fn from(from: JoinedMenuImage) -> Self {
        let JoinedMenuImage {
            rowid: _,
            id,
            image_url,
            place_id,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            image_url,
        }
    }
}

impl From<JoinedMapLocation> for MapLocation {
    fn from(from: JoinedMapLocation) -> Self {
        let JoinedMapLocation {
            rowid: _,
            id,
            map_location,
            place_id,
        } = from;
        Self {
            id: id.into(),
            place_id: place_id.into(),
            map_location,
        }
    }
}

impl From<NewsArticleEntity> for NewsArticle {
    fn from(from: NewsArticleEntity) -> Self {
        let NewsArticleEntity {
            rowid: _,
            id,
            title,
            body,
            published_at,
            image_url,
        } = from;
        Self {
            id: id.into(),
            title,
            body,
            published_at: Timestamp::from_secs(published_at),
            image_url,
        }
    }
}

impl From<UserEntity> for User {
    fn from(from: UserEntity) -> Self {
        let UserEntity {
            rowid: _,
            id,
            username,
            first_name,
            last_name,
            email,
            password,
        } = from;
        Self {
            id: id.into(),
            username,
            first_name,
            last_name,
            email: EmailAddress::new_unchecked(email),
            password: Password::from(password),
        }
    }
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        Self {
            id: from.id.as_str(),
            username: &from.username,
            first_name: &from.first_name,
            last_name: &from.last_name,
            email: from.email.as_str(),
            password: from.password.as_ref(),
        }
    }
}
