pub mod full_page_scroll;
pub mod section;
pub mod section_navigation;
pub mod top_nav;

pub use full_page_scroll::{use_full_page_context, FullPageContext, FullPageScroll, Panel};
