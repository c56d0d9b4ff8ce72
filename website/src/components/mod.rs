pub mod app_preview;
pub mod badge;
pub mod code_block;
pub mod download;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod section_heading;
