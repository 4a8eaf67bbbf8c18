use serde::{Deserialize, Serialize};

/// Page size used by every paginated employee endpoint.
pub const DEFAULT_PAGE_SIZE: u32 = 5;
/// Number of page links offered around the current page.
pub const NAVIGATE_PAGES: u32 = 5;

/// Which slice of a result set to fetch. Page numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Page numbers below 1 are treated as the first page.
    pub fn new(page: u32, size: u32) -> Self {
        PageRequest {
            page: page.max(1),
            size,
        }
    }

    pub fn first(size: u32) -> Self {
        PageRequest::new(1, size)
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.size as i64
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// One page of query results together with the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 || self.total_count <= 0 {
            return 0;
        }
        let size = self.page_size as i64;
        ((self.total_count + size - 1) / size) as u32
    }
}

/// The pagination view handed to clients under `extra.pageInfo`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo<T> {
    pub page_num: u32,
    pub page_size: u32,
    pub size: usize,
    pub total: i64,
    pub pages: u32,
    pub list: Vec<T>,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub has_previous_page: bool,
    pub has_next_page: bool,
    pub navigate_pages: u32,
    pub navigatepage_nums: Vec<u32>,
}

impl<T> PageInfo<T> {
    pub fn new(page: Page<T>, navigate_pages: u32) -> Self {
        let pages = page.total_pages();
        let page_num = page.page;
        PageInfo {
            page_num,
            page_size: page.page_size,
            size: page.items.len(),
            total: page.total_count,
            pages,
            is_first_page: page_num == 1,
            is_last_page: page_num >= pages,
            has_previous_page: page_num > 1,
            has_next_page: page_num < pages,
            navigate_pages,
            navigatepage_nums: navigate_window(page_num, pages, navigate_pages),
            list: page.items,
        }
    }
}

/// Up to `width` consecutive page numbers around `current`, kept inside
/// `1..=pages`.
pub fn navigate_window(current: u32, pages: u32, width: u32) -> Vec<u32> {
    if pages <= width {
        return (1..=pages).collect();
    }
    let half = width / 2;
    let start = if current <= half {
        1
    } else if current.saturating_add(half) > pages {
        pages - width + 1
    } else {
        current - half
    };
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(total: i64, page: u32) -> Page<i64> {
        let request = PageRequest::new(page, DEFAULT_PAGE_SIZE);
        let items = (0..total)
            .skip(request.offset() as usize)
            .take(request.limit() as usize)
            .collect();
        Page {
            items,
            total_count: total,
            page: request.page,
            page_size: request.size,
        }
    }

    #[test]
    fn record_count_per_page() {
        for total in [0i64, 1, 4, 5, 6, 23] {
            for p in 1..=7u32 {
                let info = PageInfo::new(page_of(total, p), NAVIGATE_PAGES);
                let expected = (total - 5 * (p as i64 - 1)).clamp(0, 5) as usize;
                assert_eq!(info.size, expected, "total={total} page={p}");
                assert_eq!(info.pages as i64, (total + 4) / 5);
            }
        }
    }

    #[test]
    fn page_zero_is_first_page() {
        let request = PageRequest::new(0, 5);
        assert_eq!(request.page, 1);
        assert_eq!(request.offset(), 0);
        assert_eq!(PageRequest::new(3, 5).offset(), 10);
    }

    #[test]
    fn window_is_clamped() {
        assert_eq!(navigate_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(navigate_window(1, 0, 5), Vec::<u32>::new());
        assert_eq!(navigate_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(navigate_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(navigate_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(navigate_window(15, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn flags_on_middle_page() {
        let info = PageInfo::new(page_of(23, 2), NAVIGATE_PAGES);
        assert!(info.has_previous_page);
        assert!(info.has_next_page);
        assert!(!info.is_first_page);
        assert!(!info.is_last_page);
        assert_eq!(info.list, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PageInfo::new(page_of(6, 1), NAVIGATE_PAGES)).unwrap();
        assert_eq!(json["pageNum"], 1);
        assert_eq!(json["total"], 6);
        assert_eq!(json["navigatepageNums"], serde_json::json!([1, 2]));
    }
}
