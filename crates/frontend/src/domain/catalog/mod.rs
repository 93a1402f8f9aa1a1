pub mod fixtures;
pub mod ui;
pub mod view_model;
