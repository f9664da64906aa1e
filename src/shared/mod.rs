pub mod error;

pub use error::{DeployError, Result};
