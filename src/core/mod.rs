pub mod vector;

pub use vector::PolarVec;
