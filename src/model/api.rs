use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMetaDataDto {
    pub total_count: u64,
    pub page_size: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PagedResultDto<T> {
    pub data: Vec<T>,
    pub meta_data: PaginationMetaDataDto,
}

/// Page selection shared by every paged listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-based page number (default: 1)
    #[serde(default = "default_page_number")]
    pub page_number: u64,
    /// Items per page, clamped to 1..=50 (default: 10)
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
        }
    }
}

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}
