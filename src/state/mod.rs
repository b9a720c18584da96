pub mod app;
pub mod focus;
pub mod form;
pub mod snapshot;
