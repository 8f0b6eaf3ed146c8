use uuid::Uuid;

/// An entry addressable by id inside its parent document.
pub trait Identified {
    fn id(&self) -> Uuid;
}

/// Newest-first insertion.
pub fn prepend<T>(entries: &mut Vec<T>, entry: T) {
    entries.insert(0, entry);
}

/// Removes the first entry whose id matches, keeping the order of the rest.
pub fn remove_by_id<T: Identified>(entries: &mut Vec<T>, id: Uuid) -> Option<T> {
    let position = entries.iter().position(|entry| entry.id() == id)?;
    Some(entries.remove(position))
}
