pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod url_params;
