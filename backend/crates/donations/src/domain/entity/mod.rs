pub mod donation;
pub mod program;
