use crate::id::Id;

/// A menu photograph of a place.
///
/// The image itself lives in externally managed file storage,
/// only the reference is kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuImage {
    pub id: Id,
    pub place_id: Id,
    pub image_url: Option<String>,
}
