//! Core library for the Cleanup Crew community site.
//!
//! This crate holds everything that does not depend on a display:
//!
//! - `models`: events, quiz, map, report and pledge data with the pure
//!   transforms over them (filtering, grading, message text)
//! - `components`: the six stateful page components
//! - `page`: the markup contract components check on load
//! - `site`: the page-load hook that initializes every component
//! - `store`: key-value preference storage
//! - `config`: on-disk configuration

pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod site;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{PageError, StoreError};
pub use page::Page;
pub use site::Site;
