pub mod heading;
pub mod text;
