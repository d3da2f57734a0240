#![no_std]

mod storage;
mod types;
mod validation;
mod events;
mod marketplace;

pub use marketplace::{AssetMarketplace, AssetMarketplaceClient};
pub use types::*;
