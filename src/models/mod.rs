pub mod size_value;
pub mod unit;

pub use size_value::SizeValue;
pub use unit::{C0, C1, C2, C3, C4, C5, SizeUnit, multiplier_for};
