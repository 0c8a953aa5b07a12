pub mod boundary;
pub mod collision;
pub mod integrator;
