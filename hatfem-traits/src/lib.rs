use nalgebra::RealField;

pub use nalgebra;

pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

mod shape;
pub mod tensor;

pub use shape::Shape;
