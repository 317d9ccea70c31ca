//! Data models for all collections

pub mod activity;
pub mod booking;
pub mod enums;
pub mod product;
pub mod report;
pub mod user;
