//! bkm: a command-line bookmark manager.
//!
//! Bookmarks (URL, title, tags) and a small key-value configuration store
//! live in two JSON files inside a data directory. This library crate exposes
//! all modules for use by the binary and integration tests.

pub mod app;
pub mod commands;
pub mod mappers;
pub mod platform;
pub mod prompt;
pub mod repositories;
pub mod types;
pub mod usecases;
