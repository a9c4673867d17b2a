//! The `BricksProgram` façade: one async method per program instruction or account query.

use bricks_interface::{
    error::BricksError,
    state::{
        asset_state::AssetState,
        user_state::UserState,
        AccountState,
    },
};
use solana_address::Address;
use solana_sdk::signature::Keypair;

use crate::{
    context::{
        parse_address,
        AddAsset,
        BuyAssetParams,
        CreatedAccount,
        ProgramContext,
    },
    print_kv,
    signer::{
        TransactionSigner,
        Wallet,
    },
    transactions::{
        fetch_account,
        fetch_program_accounts,
        CustomRpcClient,
    },
    views::{
        try_asset_from_owner_and_data,
        try_user_from_owner_and_data,
        Asset,
        User,
    },
    LogColor,
};

/// Client for the `bricks` program.
///
/// Built with only a connection it is read-only: the fetch methods work and every write method
/// fails with [`BricksError::MissingSigner`] before touching the network.
pub struct BricksProgram {
    rpc: CustomRpcClient,
    wallet: Option<Wallet>,
    context: ProgramContext,
}

impl BricksProgram {
    /// Creates a client. The signing context is bound only if both `public_key` and
    /// `sign_transaction` are passed.
    ///
    /// # Errors
    /// [`BricksError::MissingConnection`] if `connection` is `None`.
    pub fn new(
        connection: Option<CustomRpcClient>,
        public_key: Option<Address>,
        sign_transaction: Option<TransactionSigner>,
        context: ProgramContext,
    ) -> anyhow::Result<Self> {
        let rpc = connection.ok_or(BricksError::MissingConnection)?;
        let wallet = match (public_key, sign_transaction) {
            (Some(public_key), Some(signer)) => Some(Wallet::new(public_key, signer)),
            _ => None,
        };

        Ok(Self {
            rpc,
            wallet,
            context,
        })
    }

    pub fn read_only(connection: CustomRpcClient, context: ProgramContext) -> Self {
        Self {
            rpc: connection,
            wallet: None,
            context,
        }
    }

    pub fn with_keypair(
        connection: CustomRpcClient,
        keypair: Keypair,
        context: ProgramContext,
    ) -> Self {
        Self {
            rpc: connection,
            wallet: Some(Wallet::from_keypair(keypair)),
            context,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.wallet.is_none()
    }

    pub fn context(&self) -> &ProgramContext {
        &self.context
    }

    pub fn rpc(&self) -> &CustomRpcClient {
        &self.rpc
    }

    fn wallet(&self) -> anyhow::Result<&Wallet> {
        self.wallet
            .as_ref()
            .ok_or_else(|| BricksError::MissingSigner.into())
    }

    /// Creates the user account for `user_id` (a hyphenated UUID), derived from the signer.
    pub async fn initialize_user(&self, user_id: &str) -> anyhow::Result<CreatedAccount> {
        let wallet = self.wallet()?;
        let (instruction, user_account) = self.context.add_user(wallet.public_key, user_id)?;

        let signature = self
            .rpc
            .send_and_confirm_txn(wallet, &[instruction])
            .await?;
        if self.rpc.debug_logs() {
            print_kv!("User account", user_account, LogColor::Info);
        }

        Ok(CreatedAccount {
            hash: signature.to_string(),
            key: user_account.to_string(),
        })
    }

    pub async fn fetch_user(&self, user_key: &str) -> anyhow::Result<User> {
        let address = parse_address(user_key)?;
        let account = fetch_account(&self.rpc.client, &address).await?;

        let user =
            try_user_from_owner_and_data(&self.context.program_id, &account.owner, &account.data)?;

        if self.rpc.debug_logs() {
            println!("{}", user.fmt_summary());
        }

        Ok(user)
    }

    /// Fetches every user account, in the order the RPC node returns them.
    pub async fn fetch_all_users(&self) -> anyhow::Result<Vec<User>> {
        let accounts = fetch_program_accounts(
            &self.rpc.client,
            &self.context.program_id,
            UserState::DISCRIMINATOR,
        )
        .await?;

        let users = accounts
            .into_iter()
            .map(|(_, account)| {
                try_user_from_owner_and_data(
                    &self.context.program_id,
                    &account.owner,
                    &account.data,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.rpc.debug_logs() {
            print_kv!("Users", users.len(), LogColor::Header);
            users.iter().for_each(|user| println!("{}", user.fmt_summary()));
        }

        Ok(users)
    }

    pub async fn fetch_asset(&self, asset_key: &str) -> anyhow::Result<Asset> {
        let address = parse_address(asset_key)?;
        let account = fetch_account(&self.rpc.client, &address).await?;
        let asset =
            try_asset_from_owner_and_data(&self.context.program_id, &account.owner, &account.data)?;

        if self.rpc.debug_logs() {
            println!("{}", asset.fmt_summary());
        }

        Ok(asset)
    }

    /// Fetches every asset account, in the order the RPC node returns them.
    pub async fn fetch_all_assets(&self) -> anyhow::Result<Vec<Asset>> {
        let accounts = fetch_program_accounts(
            &self.rpc.client,
            &self.context.program_id,
            AssetState::DISCRIMINATOR,
        )
        .await?;

        let assets = accounts
            .into_iter()
            .map(|(_, account)| {
                try_asset_from_owner_and_data(
                    &self.context.program_id,
                    &account.owner,
                    &account.data,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.rpc.debug_logs() {
            print_kv!("Assets", assets.len(), LogColor::Header);
            assets.iter().for_each(|asset| println!("{}", asset.fmt_summary()));
        }

        Ok(assets)
    }

    /// Creates an asset account derived from the signer and `params.id`.
    pub async fn initialize_asset(&self, params: &AddAsset) -> anyhow::Result<CreatedAccount> {
        let wallet = self.wallet()?;
        let (instruction, asset_account) =
            self.context.initialize_asset(wallet.public_key, params)?;

        let signature = self
            .rpc
            .send_and_confirm_txn(wallet, &[instruction])
            .await?;
        if self.rpc.debug_logs() {
            print_kv!("Asset account", asset_account, LogColor::Info);
        }

        Ok(CreatedAccount {
            hash: signature.to_string(),
            key: asset_account.to_string(),
        })
    }

    /// Buys `params.amount` shares of an asset for a user account. Returns the signature.
    pub async fn buy_asset(&self, params: &BuyAssetParams) -> anyhow::Result<String> {
        let wallet = self.wallet()?;
        let instruction = self.context.buy_asset(params)?;

        let signature = self
            .rpc
            .send_and_confirm_txn(wallet, &[instruction])
            .await?;

        Ok(signature.to_string())
    }
}
