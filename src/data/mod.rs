pub mod csv;

pub use csv::{parse_batch, read_batch};
