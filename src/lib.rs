pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod tui;
pub mod ui;
pub mod usage;
