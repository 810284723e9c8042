/// Page size used when resolving a classifier label to a single food.
pub const LOOKUP_PAGE_SIZE: u32 = 5;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const MAX_SEARCH_LIMIT: u32 = 50;
/// Detail requests in flight at once during a bulk search.
pub const DETAIL_FETCH_CONCURRENCY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFoodsInput {
    pub query: String,
    pub limit: u32,
}

impl SearchFoodsInput {
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            limit,
        }
    }
}
