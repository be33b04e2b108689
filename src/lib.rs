//! Brainstorm Sessions - Collect ideas into named brainstorming sessions
//!
//! The crate is laid out hexagonally: `domain` holds sessions and ideas,
//! `ports` declares the session store, `application` runs the validate,
//! look up, mutate, and shape pipeline, and `adapters` expose it over HTTP
//! backed by an in-memory store.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
