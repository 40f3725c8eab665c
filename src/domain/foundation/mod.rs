//! Shared domain primitives (value objects, catalogs, errors).

mod activity_type;
mod body_area;
mod errors;
mod ids;
mod pain_level;
mod timestamp;
mod year_level;

pub use activity_type::ActivityType;
pub use body_area::BodyArea;
pub use errors::ValidationError;
pub use ids::SessionId;
pub use pain_level::{PainLevel, MAX_PAIN, MIN_PAIN};
pub use timestamp::Timestamp;
pub use year_level::YearLevel;
