pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod sessions;
pub mod state;
pub mod wizard;
