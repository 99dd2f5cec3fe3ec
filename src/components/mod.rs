pub mod about;
pub mod header;
pub mod intro;
pub mod outbound_link;
pub mod project;
pub mod projects;
pub mod section_heading;

pub use about::About;
pub use header::Header;
pub use intro::Intro;
pub use projects::Projects;
