pub mod app;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod combo;
pub mod config;
pub mod paths;
pub mod spacing;
pub mod theme;
