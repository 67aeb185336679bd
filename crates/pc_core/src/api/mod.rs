pub mod json_api;

pub use json_api::{
    parse_recommendation, recommend_play_json, request_schema, response_schema,
    RecommendPlayRequest,
};
