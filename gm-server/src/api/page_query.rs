use gm_db::PageRequest;

use serde::Deserialize;

/// Query parameters for paged list endpoints (`?page=0&size=20`)
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<PageQuery> for PageRequest {
    fn from(query: PageQuery) -> Self {
        let defaults = PageRequest::default();
        PageRequest {
            page: query.page.unwrap_or(defaults.page),
            size: query.size.unwrap_or(defaults.size).clamp(1, 100),
        }
    }
}
