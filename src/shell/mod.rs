// Composition root for the items service.
//
// Responsibilities
// - Read config from the environment.
// - Set up logging.
// - Wire the in-memory store into the application state and the router.

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod state;
