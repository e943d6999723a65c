pub mod collector;
pub mod sensor;
