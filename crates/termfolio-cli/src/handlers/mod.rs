pub mod print;
pub mod view;
