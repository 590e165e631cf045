pub mod analytics;
pub mod api;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod services;
