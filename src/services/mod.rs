pub mod config;
pub mod stylist;
