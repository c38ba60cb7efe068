use super::prelude::*;

pub fn list_visits<R>(
    repo: &R,
    user_id: &str,
    page_token: Option<&str>,
) -> Result<Page<(VisitRecord, Place)>>
where
    R: VisitRepo + PlaceRepo,
{
    let visits = repo.visits_of_user(user_id)?;
    let mut entries = Vec::with_capacity(visits.len());
    for visit in visits {
        let place = repo.get_place(visit.place_id.as_str())?;
        entries.push((visit, place));
    }
    Ok(paginate(entries, LISTING_PAGE_SIZE, page_token))
}
