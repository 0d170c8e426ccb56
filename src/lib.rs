//! Mama's Kitchen: a Nigerian recipe browser with a session shopping list and a
//! keyword-matching recipe assistant.
//!
//! The core modules are plain synchronous data types. The Dioxus front-end in `ui` and
//! `views` is compiled only with one of the `web`, `desktop` or `mobile` features.

pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod markup;
pub mod notice;
pub mod preferences;
pub mod recommend;
pub mod shopping;
pub mod state;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
