//! HTTP trigger that enqueues a backup job covering every user kind of a
//! datastore.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
