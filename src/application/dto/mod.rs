//! # Data Transfer Objects

pub mod report_config;
