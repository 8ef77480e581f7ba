//! `Folio` - config-driven portfolio gallery
//!
//! Loads `projects.json` and friends on every request, renders them into
//! a card grid with `folio-render`, and serves the result over HTTP or
//! writes it out as a static site.

pub mod cli;
pub mod error;
pub mod export;
pub mod observability;
pub mod pages;
pub mod server;
pub mod site;
