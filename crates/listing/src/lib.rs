pub mod pagination;
pub mod records;
pub mod sort;

pub use pagination::{
    DEFAULT_PAGE_SIZE, PageItem, PageItems, clamp_page, go_to_page, page_items, page_slice,
    total_pages,
};
pub use records::{filter_by_name, next_id};
pub use sort::{SortDirection, sort_by_id};
