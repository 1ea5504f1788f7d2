//! GraphQL schema, resolvers and HTTP transport for the car registry.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! cars serve --port 4000
//!
//! # Execute a query from CLI
//! cars query '{ searchCars(query: "toy") { id make model } }'
//!
//! # Execute a mutation from CLI
//! cars mutate 'addCar(input: { make: "Ford", model: "Focus", year: 2015 }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `cars`, `car`, `searchCars`
//! - **Mutations**: `addCar`, `updateCar`, `deleteCar`

mod schema;
mod server;
mod types;

pub use schema::{CarsSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{GRAPHQL_PATH, WELCOME_TEXT, create_app, run_server};
pub use types::*;
