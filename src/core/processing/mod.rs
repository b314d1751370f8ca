pub mod apply;
pub mod catalog;
pub mod emit;
pub mod mask;
pub mod resize;
