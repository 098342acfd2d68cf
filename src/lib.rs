//! Telegram AI Bot - relays `/ai` queries to an AI completion endpoint
//!
//! The bot answers three commands. `/start` and `/help` send fixed replies;
//! `/ai <text>` (or `/ai` in reply to a message) forwards the query to an
//! OpenAI-compatible endpoint and delivers the answer as Telegram HTML,
//! showing a short-lived status message while the call is in flight.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
