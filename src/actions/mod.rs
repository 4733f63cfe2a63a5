pub mod assistant;
pub mod display;
pub mod handler;
pub mod patterns;
pub mod settings;
