pub mod adapters;
pub mod db;
pub mod models;
pub mod repos;
