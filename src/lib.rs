pub mod animation;
pub mod config;
pub mod models;
pub mod render;
pub mod utilities;
