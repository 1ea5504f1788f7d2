//! # Cars - an in-memory car registry served over GraphQL
//!
//! A small demo service holding a list of cars in process memory and
//! exposing list, lookup, search, add, update and delete through a GraphQL
//! schema. Nothing is persisted; the registry is seeded with four cars on
//! every start.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve the API with GraphiQL on http://localhost:4000/graphql
//! cars serve
//!
//! # Run a one-off query in process
//! cars query '{ cars { id make model year } }'
//!
//! # Print the schema
//! cars schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP transport
//! - [`model`]: Data models (Car, CarInput)
//! - [`storage`]: The in-memory car registry

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles the optional `cars.toml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CarsError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

pub mod logging;

/// Data models for cars.
pub mod model;

/// In-memory car registry.
pub mod storage;
