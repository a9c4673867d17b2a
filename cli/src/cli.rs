use std::{
    fs,
    path::PathBuf,
};

use anyhow::Context;
use bricks_client::{
    AddAsset,
    BricksProgram,
    BuyAssetParams,
};
use clap::{
    command,
    Parser,
    Subcommand,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "bricks")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Creates a user account for the signer.
    CreateUser {
        /// User identifier as a hyphenated UUID.
        #[arg(long)]
        id: String,
    },

    /// Prints a single user account.
    FetchUser {
        /// The user account address.
        key: String,
    },

    /// Prints every user account owned by the program.
    FetchUsers,

    /// Prints a single asset account.
    FetchAsset {
        /// The asset account address.
        key: String,
    },

    /// Prints every asset account owned by the program.
    FetchAssets,

    /// Creates an asset account for the signer from a JSON file of asset parameters.
    CreateAsset {
        /// Path to a JSON file with `id`, `name`, `location`, `attributes`, `images`,
        /// `virtual_link`, `end_date_timestamp`, `value` and `timeline`.
        #[arg(short = 'p', long)]
        params: PathBuf,
    },

    /// Buys shares of an asset for a user account.
    BuyAsset {
        /// The user account receiving the shares.
        #[arg(short = 'u', long)]
        user_account: String,

        /// The asset account being bought.
        #[arg(short = 'a', long)]
        asset: String,

        /// The number of shares.
        #[arg(long)]
        amount: u64,
    },
}

impl Command {
    /// Whether the command sends a transaction and therefore needs `BRICKS_SECRET_KEY`.
    pub fn needs_signer(&self) -> bool {
        matches!(
            self,
            Command::CreateUser { .. } | Command::CreateAsset { .. } | Command::BuyAsset { .. }
        )
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn load_asset_params(path: &PathBuf) -> anyhow::Result<AddAsset> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Couldn't read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid asset parameters in {}", path.display()))
}

pub async fn run(program: &BricksProgram, command: Command) -> anyhow::Result<()> {
    match command {
        Command::CreateUser { id } => print_json(&program.initialize_user(&id).await?),
        Command::FetchUser { key } => print_json(&program.fetch_user(&key).await?),
        Command::FetchUsers => print_json(&program.fetch_all_users().await?),
        Command::FetchAsset { key } => print_json(&program.fetch_asset(&key).await?),
        Command::FetchAssets => print_json(&program.fetch_all_assets().await?),
        Command::CreateAsset { params } => {
            let params = load_asset_params(&params)?;
            print_json(&program.initialize_asset(&params).await?)
        }
        Command::BuyAsset {
            user_account,
            asset,
            amount,
        } => {
            let signature = program
                .buy_asset(&BuyAssetParams {
                    user_account,
                    asset_key: asset,
                    amount,
                })
                .await?;
            print_json(&signature)
        }
    }
}
