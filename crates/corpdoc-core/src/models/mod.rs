//! Data models for parsed company documents and configuration.

pub mod company;
pub mod config;
