//! PocketBase REST API
//!
//! A small client for the admin endpoints the importer needs: admin
//! authentication, collection management and record creation/listing.

pub mod backend;
pub mod client;
pub mod config;
pub mod models;

pub use backend::Backend;
pub use client::PocketBaseClient;
pub use config::ClientConfig;
