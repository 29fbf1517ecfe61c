// src/lib.rs

pub mod api;
pub mod app;
pub mod catalog;
pub mod chat_pane;
pub mod config;
pub mod constants;
pub mod conversation;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod models;
pub mod reducer;
pub mod runtime;
pub mod selection;
pub mod status_indicator;
pub mod ui;
