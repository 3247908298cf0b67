use async_graphql::InputObject;

use infra::pagination::LimitOffset;

#[derive(InputObject, Clone, Copy)]
pub struct PaginationInput {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationInput {
    pub fn to_limit_offset(&self) -> LimitOffset {
        LimitOffset {
            limit: self.limit.unwrap_or(50).clamp(1, 200),
            offset: self.offset.unwrap_or(0).max(0),
        }
    }
}

impl Default for PaginationInput {
    fn default() -> Self {
        Self {
            limit: Some(50),
            offset: Some(0),
        }
    }
}
