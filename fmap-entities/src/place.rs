use crate::id::Id;

/// A venue worth visiting: descriptive metadata, a type
/// classification and a set of tag labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub location: String,
    pub work_hours: String,
    pub image_url: Option<String>,
    pub place_type: Id,
    pub tags: Vec<String>,
}

/// Classification category a [`Place`] belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceType {
    pub id: Id,
    pub name: String,
}
