//! Client-side behavior of an "under construction" landing page: an email
//! subscription form (validation, simulated submission, notifications) plus
//! a handful of cosmetic effects.
//!
//! A host binds a `Page` to its document, forwards user input to it, drives
//! its timers (`Page::step` and friends), and paints `Page::view`.

pub mod configuration;
pub mod document;
pub mod domain;
pub mod effects;
pub mod notification;
pub mod page;
pub mod render;
pub mod subscription;
pub mod telemetry;

pub use page::AttachError;
pub use page::Page;
