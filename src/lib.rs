//! 비교 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod chart;
pub mod config;
pub mod currency;
pub mod engine;
pub mod i18n;
pub mod input;
pub mod preset;
pub mod report;
pub mod ui_cli;
pub mod validation;
pub mod vehicle;
