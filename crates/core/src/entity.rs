//! Entity trait: things with a stable identity that outlives field changes.

/// An object identified by `id` rather than by its field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether this entity is the one identified by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
