//! Reusable view pieces: the site header and the smaller parts it is built
//! from, plus the error page.

pub mod dropdown;
pub mod error_template;
pub mod header;
pub mod icons;
pub mod search_bar;
