//! # pc_core - Football Play Caller Core
//!
//! Shared contract between the play-calling client and the decision engine.
//!
//! ## Features
//! - Validated game situation (field position, down, yard gain target)
//! - Field-zone classification mirrored by every UI surface
//! - JSON request/response contract for `POST /api/recommend-play`
//! - Deterministic reference play book

pub mod api;
pub mod contract;
pub mod engine;
pub mod error;
pub mod models;

pub use api::{
    parse_recommendation, recommend_play_json, request_schema, response_schema,
    RecommendPlayRequest,
};
pub use engine::PlayBook;
pub use error::{RecommendError, Result, SituationError};
pub use models::{Down, FieldPosition, FieldZone, Recommendation, SituationModel, YardGainTarget};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
