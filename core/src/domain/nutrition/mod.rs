pub mod entities;
pub mod extraction;
pub mod fallback;
pub mod ports;
pub mod search_terms;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
