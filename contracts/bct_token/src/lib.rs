#![no_std]

mod storage;
mod types;
mod validation;
mod events;
mod token;

pub use token::{BctToken, BctTokenClient};
pub use types::*;
