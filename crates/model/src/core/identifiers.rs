/// Access to a record's backend-assigned integer id.
///
/// Implemented by every row type the listing helpers paginate or sort.
pub trait Identified {
    fn id(&self) -> u64;
}

/// Access to a record's display name, for search filtering.
pub trait Named {
    fn name(&self) -> &str;
}
