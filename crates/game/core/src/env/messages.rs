//! Localized message table oracle.

/// Looks up client message templates by id.
///
/// Templates may contain `%d`, `%name%`, `%point%` and `%rank%` placeholders;
/// substitution is the caller's job.
pub trait MessageOracle: Send + Sync {
    /// Returns the template for `id`, if the table has one.
    fn get(&self, id: u32) -> Option<&str>;

    /// Returns the template for `id`, or a visible placeholder when missing.
    fn message(&self, id: u32) -> String {
        self.get(id)
            .map_or_else(|| format!("[msg {id}]"), str::to_owned)
    }
}
