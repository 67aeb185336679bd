//! Recommendation client.
//!
//! Drives one request/response exchange with a decision engine at a time and
//! keeps the resulting [`RequestState`] as the single source of truth for the
//! UI. Engines are adapters behind [`DecisionEngine`]: HTTP for the real
//! service, in-process for offline use.

pub mod client;
pub mod config;
pub mod engine;
pub mod http;
pub mod session;
pub mod state;
pub mod view;

pub use client::{Dispatch, RecommendationClient};
pub use config::{ClientConfig, ConfigError};
pub use engine::{DecisionEngine, InProcessEngine};
pub use http::HttpDecisionEngine;
pub use session::PlayCallSession;
pub use state::{Failure, RequestState};
pub use view::{DisplayView, RankedPlay, ResultPanel, SituationPanel};
