//! cleancards - terminal flashcards contrasting dirty and clean code
//!
//! Each card shows a clean-code principle with a "bad" and a "good"
//! snippet, highlighted by a small line-based scanner. An optional AI
//! explanation can be fetched for the card on screen.

pub mod app;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod display;
pub mod error;
pub mod explain;
pub mod input;
pub mod panel;
pub mod syntax;
pub mod terminal;
