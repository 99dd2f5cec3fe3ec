pub mod active_section;
pub mod entrance;
pub mod scroll_progress;
pub mod section_in_view;

pub use active_section::{use_active_section, ActiveSectionAction, ActiveSectionProvider};
pub use entrance::use_entrance;
pub use scroll_progress::use_scroll_progress;
pub use section_in_view::{use_section_in_view, DEFAULT_SECTION_THRESHOLD};
