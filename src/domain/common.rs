/// Provides access to the name an entity is keyed by.
pub trait NamedEntity {
    fn name(&self) -> &str;
}
