pub mod app;
pub mod config;
pub mod effects;
pub mod graphql;
pub mod logging;
pub mod mock;
pub mod models;
pub mod services;
pub mod slices;
pub mod storage;
pub mod store;
