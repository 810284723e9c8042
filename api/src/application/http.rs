pub mod assistant;
pub mod classification;
pub mod health;
pub mod nutrition;
pub mod server;
