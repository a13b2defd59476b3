//! Core, DOM-free primitives and helpers for the Web UI.
pub mod breakpoints;
pub mod catalog;
pub mod config;
pub mod logic;
pub mod routing;
pub mod store;
