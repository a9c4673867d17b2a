//! Client configuration from environment variables.
//!
//! - `BRICKS_RPC_URL`: RPC endpoint, defaults to [`DEFAULT_RPC_URL`].
//! - `BRICKS_PROGRAM_ID`: program deployment, defaults to [`bricks_interface::program::ID`].
//! - `BRICKS_PURCHASE_RECIPIENT`: `buy_asset` payee, defaults to [`DEFAULT_PURCHASE_RECIPIENT`].
//! - `BRICKS_DEBUG_LOGS`: `true`/`1` to print colored transaction logs.
//! - `BRICKS_COMPUTE_BUDGET`: compute unit limit prepended to every transaction.
//! - `BRICKS_SECRET_KEY`: signing keypair as a JSON byte array or base58 string.

use std::env;

use anyhow::Context;
use solana_address::Address;
use solana_sdk::{
    bs58,
    signature::Keypair,
};

use crate::{
    context::{
        parse_address,
        ProgramContext,
        DEFAULT_PURCHASE_RECIPIENT,
    },
    transactions::{
        CustomRpcClient,
        SendTransactionConfig,
        DEFAULT_RPC_URL,
    },
};

pub const RPC_URL_VAR: &str = "BRICKS_RPC_URL";
pub const PROGRAM_ID_VAR: &str = "BRICKS_PROGRAM_ID";
pub const PURCHASE_RECIPIENT_VAR: &str = "BRICKS_PURCHASE_RECIPIENT";
pub const DEBUG_LOGS_VAR: &str = "BRICKS_DEBUG_LOGS";
pub const COMPUTE_BUDGET_VAR: &str = "BRICKS_COMPUTE_BUDGET";
pub const SECRET_KEY_VAR: &str = "BRICKS_SECRET_KEY";

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn address_var(name: &str, default: Address) -> anyhow::Result<Address> {
    optional_var(name)
        .map_or(Ok(default), |value| parse_address(value.trim()))
        .with_context(|| format!("Environment variable {name} must be a base58 address"))
}

pub fn rpc_url() -> String {
    optional_var(RPC_URL_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.into())
}

pub fn program_context() -> anyhow::Result<ProgramContext> {
    Ok(ProgramContext::new(
        address_var(PROGRAM_ID_VAR, bricks_interface::program::ID)?,
        address_var(PURCHASE_RECIPIENT_VAR, DEFAULT_PURCHASE_RECIPIENT)?,
    ))
}

pub fn send_transaction_config() -> anyhow::Result<SendTransactionConfig> {
    let compute_budget = optional_var(COMPUTE_BUDGET_VAR)
        .map(|value| value.trim().parse::<u32>())
        .transpose()
        .with_context(|| format!("Environment variable {COMPUTE_BUDGET_VAR} must be a u32"))?;
    let debug_logs = optional_var(DEBUG_LOGS_VAR)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true"));

    Ok(SendTransactionConfig {
        compute_budget,
        debug_logs,
    })
}

pub fn rpc_client() -> anyhow::Result<CustomRpcClient> {
    Ok(CustomRpcClient::new_from_url(
        &rpc_url(),
        send_transaction_config()?,
    ))
}

/// Parses a keypair from a JSON byte array (`[12, 34, ...]`) or a base58 string.
pub fn parse_keypair(kp_str: &str) -> anyhow::Result<Keypair> {
    let kp_str = kp_str.trim();
    let byte_vec: Vec<u8> = if kp_str.starts_with('[') {
        serde_json::from_str(kp_str).context("Invalid JSON keypair")?
    } else {
        bs58::decode(kp_str)
            .into_vec()
            .context("Invalid base58 keypair")?
    };

    Keypair::try_from(byte_vec.as_slice()).context("Invalid keypair bytes")
}

/// The signing keypair, if `BRICKS_SECRET_KEY` is set.
pub fn keypair() -> anyhow::Result<Option<Keypair>> {
    optional_var(SECRET_KEY_VAR)
        .map(|value| parse_keypair(&value))
        .transpose()
}
