pub mod listener;
pub mod use_full_page_scroll;
pub mod use_reduced_motion;
pub mod use_scroll_lock;
pub mod use_viewport_height;

pub use use_full_page_scroll::{
    use_full_page_scroll, FullPageScrollHandle, FullPageScrollOptions, NavRequest,
};
pub use use_reduced_motion::use_reduced_motion;
pub use use_scroll_lock::use_scroll_lock;
pub use use_viewport_height::use_viewport_height;
