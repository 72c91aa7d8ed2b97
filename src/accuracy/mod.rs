//! Category accuracy scoring: how closely actual spending tracked the
//! budget, classified into dartboard zones.

pub mod engine;
pub mod placement;
pub mod zone;

pub use engine::{compute_accuracy, day_exceeded, CategoryAccuracy};
pub use placement::{hit_angle, target_position};
pub use zone::AccuracyZone;
