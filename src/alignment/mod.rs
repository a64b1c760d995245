pub mod distance;
pub(crate) mod matrix;
pub mod normalize;
pub mod report;
pub(crate) mod resolve;
pub(crate) mod strict;
