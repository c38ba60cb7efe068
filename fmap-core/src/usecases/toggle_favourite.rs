use super::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteToggle {
    Added,
    Removed,
}

/// Toggles membership of the user in the place's favourite set.
///
/// The place id from the route and the one submitted with the form
/// must match, otherwise the request is rejected without touching
/// the favourites relation.
pub fn toggle_favourite<R>(
    repo: &R,
    user_id: &str,
    place_id: &str,
    submitted_place_id: &str,
) -> Result<FavouriteToggle>
where
    R: PlaceRepo + FavouriteRepo,
{
    if place_id != submitted_place_id {
        return Err(Error::PlaceIdMismatch);
    }
    let place = repo.get_place(place_id)?;
    debug_assert_eq!(place.id.as_str(), place_id);
    if repo.is_favourite(user_id, place_id)? {
        repo.remove_favourite(user_id, place_id)?;
        Ok(FavouriteToggle::Removed)
    } else {
        repo.add_favourite(user_id, place_id)?;
        Ok(FavouriteToggle::Added)
    }
}
