pub mod chat;
pub mod config;
pub mod shared;
pub mod tasks;
pub mod web_server;
