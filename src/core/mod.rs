pub mod atoms;
pub mod context;
