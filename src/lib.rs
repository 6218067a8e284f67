//! Sketchpot Library
//!
//! Prompt-driven workspace for sketching landing page layouts: static style
//! catalogs, a pure layout composer, a randomized layout factory, the
//! workspace store with its view/modal controller, and an optional remote
//! text-generation collaborator.

pub mod app;
pub mod catalog;
pub mod compose;
pub mod config;
pub mod factory;
pub mod generation;
pub mod layout;
pub mod messaging;
pub mod remote;
pub mod runner;
pub mod workspace;
