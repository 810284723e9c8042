pub mod classifier;
pub mod http;
pub mod llm;
pub mod usda;
