pub mod analytics;
pub mod app;
pub mod config;
pub mod dates;
pub mod dishes;
pub mod error;
pub mod meals;
pub mod nutrients;
pub mod recommendations;
pub mod state;
pub mod stats;
