//! Configuration module

mod tag_page;

pub use tag_page::TagPageConfig;
