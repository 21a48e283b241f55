pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod shape;
pub mod tmdb;
