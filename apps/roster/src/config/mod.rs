//! Runtime configuration: database location/pool settings and the HTTP bind address.

pub mod db;
pub mod server;
