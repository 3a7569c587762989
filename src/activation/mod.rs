pub mod activation;

pub use activation::{sigmoid, sigmoid_matrix, sigmoid_vec};
