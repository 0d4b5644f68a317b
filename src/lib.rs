pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod oneshot;
pub mod query;
pub mod results;
pub mod scroll;
pub mod search;
pub mod widget;
