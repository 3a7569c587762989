pub mod matrix;

pub use matrix::{prepend_bias, Matrix};
