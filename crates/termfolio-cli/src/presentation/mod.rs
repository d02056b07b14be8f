pub mod document;
pub mod presenters;
pub mod renderers;
pub mod style;
pub mod view_models;
pub mod views;
