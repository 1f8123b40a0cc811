// bkm shared types
// Value objects, entities, stored record shapes and error enums used across the crate.

pub mod bookmark;
pub mod config;
pub mod dto;
pub mod errors;
pub mod search;
pub mod timestamp;
