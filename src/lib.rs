pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod gallery;
pub mod handlers;
pub mod paths;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
