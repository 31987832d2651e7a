use serde::Serialize;

/// JSON envelope for paginated listings:
/// `{ "data": [...], "totalPages": N, "currentPage": N }`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub total_pages: i64,
    pub current_page: i64,
}

impl<T> PageResponse<T> {
    /// Build a page envelope from one page of items and the total row count.
    pub fn new(data: Vec<T>, total: i64, page: i64, per_page: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            data,
            total_pages,
            current_page: page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let page = PageResponse::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_empty_page() {
        let page = PageResponse::<i32>::new(vec![], 0, 1, 20);
        assert_eq!(page.total_pages, 0);
    }
}
