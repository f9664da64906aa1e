pub mod constants;
pub mod kubernetes;
