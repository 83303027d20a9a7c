pub mod api;
pub mod cabin;
pub mod cache;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod occupancy;
pub mod router;
pub mod seat_map;
pub mod server;
