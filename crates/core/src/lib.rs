//! ShopJoy Core - Shared types library.
//!
//! This crate provides common types used across the ShopJoy frontend
//! components:
//! - `client` - REST client for the ShopJoy backend API
//! - `web` - Server-rendered admin and customer views
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, plus status and role enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
