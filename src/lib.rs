//! Skyward - Terminal Reflex Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod config;
pub mod constants;
pub mod core;
pub mod input;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
