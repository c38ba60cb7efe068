use super::prelude::*;

pub fn list_wishlist<R: FavouriteRepo>(
    repo: &R,
    user_id: &str,
    page_token: Option<&str>,
) -> Result<Page<Place>> {
    let places = repo.favourite_places_of_user(user_id)?;
    Ok(paginate(places, WISHLIST_PAGE_SIZE, page_token))
}
