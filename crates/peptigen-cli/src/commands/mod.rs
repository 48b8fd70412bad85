pub mod suggest;
pub mod surface;
