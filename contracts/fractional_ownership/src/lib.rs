#![no_std]

mod storage;
mod types;
mod validation;
mod events;
mod ownership;

pub use ownership::{FractionalOwnership, FractionalOwnershipClient};
pub use types::*;
