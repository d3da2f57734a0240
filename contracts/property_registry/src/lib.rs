#![no_std]

mod storage;
mod types;
mod validation;
mod events;
mod registry;

pub use registry::{PropertyRegistry, PropertyRegistryClient};
pub use types::*;
