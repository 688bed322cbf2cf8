//! 유스케이스 모음.

pub mod analyze_sentiment;
pub mod classify_feedback;
pub mod init_config;
pub mod inspect_config;
pub mod prepare_variant;
pub mod submit_feedback;
