//! Brainstorm - Brainstorming Sessions Service
//!
//! This crate serves named brainstorming sessions, each holding an ordered
//! list of ideas, over a small JSON API and two page endpoints.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod testing;
