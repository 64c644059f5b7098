mod use_escape_key;
mod use_points;

pub use use_escape_key::use_escape_key;
pub use use_points::{PointsHandle, use_point_store, use_points};
