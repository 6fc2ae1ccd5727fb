//! HTTP request handlers

pub mod health;
pub mod multi;
pub mod players;
pub mod recommend;
pub mod stats;
pub mod teams;
