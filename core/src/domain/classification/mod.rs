pub mod entities;
pub mod labels;
pub mod ports;
pub mod preprocessing;
pub mod scoring;
pub mod services;
pub mod value_objects;
