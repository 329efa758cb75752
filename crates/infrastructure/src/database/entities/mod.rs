pub mod machines;
pub mod readings;
