pub mod math;
pub mod pagination;
