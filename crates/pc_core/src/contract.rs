//! Contract constants shared across the client, service, and play book.
//!
//! Anything both sides of the wire must agree on lives here: error codes,
//! field-position bounds, zone thresholds, routes, and the user-facing
//! failure text.

pub mod error_codes {
    pub const INVALID_RANGE: &str = "INVALID_RANGE";
    pub const INVALID_ENUM: &str = "INVALID_ENUM";
    pub const TRANSPORT_FAILURE: &str = "TRANSPORT_FAILURE";
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
}

/// Own end zone.
pub const FIELD_POSITION_MIN: u8 = 0;
/// Opponent end zone.
pub const FIELD_POSITION_MAX: u8 = 100;

// Zone upper bounds, inclusive. Anything above RED_ZONE_APPROACH_MAX is the red zone.
pub const OWN_TERRITORY_MAX: u8 = 20;
pub const MIDFIELD_MAX: u8 = 50;
pub const RED_ZONE_APPROACH_MAX: u8 = 80;

pub const API_ROOT_PATH: &str = "/api/";
pub const RECOMMEND_PLAY_PATH: &str = "/api/recommend-play";
pub const API_ROOT_MESSAGE: &str = "Football Play Recommendation System API";

/// The only failure text a user ever sees.
pub const USER_FAILURE_MESSAGE: &str = "Failed to get play recommendations. Please try again.";

#[inline]
pub fn is_valid_field_position(value: i64) -> bool {
    (i64::from(FIELD_POSITION_MIN)..=i64::from(FIELD_POSITION_MAX)).contains(&value)
}
