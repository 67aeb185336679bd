pub mod field_zone;
pub mod recommendation;
pub mod situation;

pub use field_zone::FieldZone;
pub use recommendation::Recommendation;
pub use situation::{Down, FieldPosition, SituationModel, YardGainTarget};
