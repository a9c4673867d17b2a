//! Client-side utilities for interacting with the `bricks` program.
//!
//! [`BricksProgram`] is the entry point. The modules below it are public for callers that want to
//! build instructions, derive PDAs, or decode accounts without going through the façade.

pub mod context;
pub mod load_env;
pub mod logs;
pub mod pda;
pub mod program;
pub mod signer;
pub mod transactions;
pub mod views;

pub use bricks_interface::{
    error::BricksError,
    identifier::{
        bytes_to_uuid,
        uuid_to_bytes,
    },
    pack::{
        bytes_to_string,
        pad_fixed,
    },
};
pub use context::{
    AddAsset,
    BuyAssetParams,
    CreatedAccount,
    ProgramContext,
};
pub use logs::LogColor;
pub use program::BricksProgram;
pub use signer::{
    SignTransaction,
    SignerFn,
    Wallet,
};
pub use views::{
    Asset,
    AssetAttribute,
    AssetTimeline,
    User,
};
