pub mod assistant;
pub mod classification;
pub mod common;
pub mod health;
pub mod nutrition;
