pub mod connect;
pub mod footer;
pub mod intro;
pub mod rail;
pub mod status_bar;
pub mod work;
