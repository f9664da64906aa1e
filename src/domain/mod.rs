//! Deployment domain

pub mod deployer;
pub mod manifest;
