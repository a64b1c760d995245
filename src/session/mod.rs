pub mod mask;
pub mod review;
