//! Page components. Only `logo_section` carries state; the rest is static markup.

pub mod footer;
pub mod header;
pub mod logo_section;
pub mod search_box;
