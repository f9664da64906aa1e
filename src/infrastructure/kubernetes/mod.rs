pub mod client;

pub use client::{PostgresKubeClient, PostgresKubeClientImpl};
