//! Lunch places server.
//!
//! A small web service that answers: "where can I get lunch near this
//! postal code, within this many minutes of walking or driving?"

pub mod config;
pub mod domain;
pub mod lookup;
pub mod maps;
pub mod web;
