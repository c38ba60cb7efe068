mod edit_profile;
mod error;
pub mod forms;
mod get_news_article;
mod list_news;
mod list_places;
mod list_visits;
mod list_wishlist;
mod login;
mod place_details;
mod record_visit;
mod register;
mod toggle_favourite;


pub use self::{
    edit_profile::*, error::Error, get_news_article::*, list_news::*, list_places::*,
    list_visits::*, list_wishlist::*, login::*, place_details::*, record_visit::*, register::*,
    toggle_favourite::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::*,
        util::pagination::{paginate, Page, LISTING_PAGE_SIZE, WISHLIST_PAGE_SIZE},
    };
}
