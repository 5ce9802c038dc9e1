//! Multi-period allocation matrix for trend views.

mod builder;

pub use builder::{
    build_matrix, build_matrix_with, CompanyOrder, HoldingsMatrix, MatrixOptions, MatrixRow,
};
