pub mod search_foods;
pub mod search_nutrition;
