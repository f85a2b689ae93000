pub mod app;
pub mod data;
pub mod grading;
pub mod model;
pub mod records;
pub mod ui;
pub mod view_models;

pub use app::RevisionApp;
