//! Humanizer: deterministic rewriting of LLM-drafted Statements of Purpose into more
//! conversational prose, served over a small HTTP API.

pub mod config;
pub mod errors;
pub mod humanize;
pub mod routes;
pub mod state;
