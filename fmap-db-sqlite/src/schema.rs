///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (slug) {
        slug -> Text,
        label -> Text,
    }
}

table! {
    place_tags (place_rowid, tag_slug) {
        place_rowid -> BigInt,
        tag_slug -> Text,
    }
}

joinable!(place_tags -> tags (tag_slug));

///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (rowid) {
        rowid -> BigInt,
        id -> Text,
        username -> Text,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        password -> Text,
    }
}

///////////////////////////////////////////////////////////////////////
// Places
///////////////////////////////////////////////////////////////////////

table! {
    place_types (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    places (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
        description -> Text,
        location -> Text,
        work_hours -> Text,
        image_url -> Nullable<Text>,
        place_type_rowid -> BigInt,
    }
}

joinable!(places -> place_types (place_type_rowid));
joinable!(place_tags -> places (place_rowid));

table! {
    menu_images (rowid) {
        rowid -> BigInt,
        id -> Text,
        place_rowid -> BigInt,
        image_url -> Nullable<Text>,
    }
}

joinable!(menu_images -> places (place_rowid));

table! {
    map_locations (rowid) {
        rowid -> BigInt,
        id -> Text,
        place_rowid -> BigInt,
        map_location -> Text,
    }
}

joinable!(map_locations -> places (place_rowid));

///////////////////////////////////////////////////////////////////////
// Favourites (wishlist)
///////////////////////////////////////////////////////////////////////

table! {
    favourites (user_rowid, place_rowid) {
        user_rowid -> BigInt,
        place_rowid -> BigInt,
    }
}

joinable!(favourites -> users (user_rowid));
joinable!(favourites -> places (place_rowid));

///////////////////////////////////////////////////////////////////////
// News
///////////////////////////////////////////////////////////////////////

table! {
    news_articles (rowid) {
        rowid -> BigInt,
        id -> Text,
        title -> Text,
        body -> Text,
        published_at -> BigInt,
        image_url -> Nullable<Text>,
    }
}

///////////////////////////////////////////////////////////////////////
// Visit history
///////////////////////////////////////////////////////////////////////

table! {
    visits (rowid) {
        rowid -> BigInt,
        id -> Text,
        user_rowid -> Nullable<BigInt>,
        place_rowid -> BigInt,
        visited_on -> Text,
        comment -> Nullable<Text>,
    }
}

joinable!(visits -> places (place_rowid));

allow_tables_to_appear_in_same_query!(
    favourites,
    map_locations,
    menu_images,
    place_tags,
    place_types,
    places,
    tags,
    users,
    visits,
);
