/// A label applied to places for filtering.
///
/// The slug is the URL-safe normalization of the label and
/// uniquely identifies the tag.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tag {
    pub label: String,
    pub slug: String,
}
