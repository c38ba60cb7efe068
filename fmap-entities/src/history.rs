use crate::{id::Id, time::Date};

/// A recorded visit of a user to a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub id: Id,
    /// `None` once the owning account has been removed.
    pub user_id: Option<Id>,
    pub visited_on: Date,
    pub place_id: Id,
    pub comment: Option<String>,
}
