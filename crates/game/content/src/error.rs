/// Errors raised while validating content tables.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("hunger thresholds must be strictly increasing, got {0:?}")]
    UnorderedHungerThresholds([i32; 4]),

    #[error("duplicate dialogue line for species {species} ({trigger}, {hunger})")]
    DuplicateTalkLine {
        species: u32,
        trigger: String,
        hunger: String,
    },
}
