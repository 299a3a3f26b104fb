pub mod errors;
pub mod temperature;
