//! Lightweight, nonblocking RPC client utilities for sending `bricks` transactions and reading
//! program accounts.

use bricks_interface::{
    error::BricksError,
    state::Discriminator,
};
use solana_account::Account;
use solana_address::Address;
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{
        RpcAccountInfoConfig,
        RpcProgramAccountsConfig,
        UiAccountEncoding,
    },
    rpc_filter::{
        Memcmp,
        RpcFilterType,
    },
};
use solana_commitment_config::CommitmentConfig;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_sdk::{
    message::{
        Instruction,
        Message,
    },
    signature::Signature,
    transaction::Transaction,
};

use crate::{
    print_kv,
    signer::Wallet,
    LogColor,
};

pub const DEFAULT_RPC_URL: &str = "http://localhost:8899";

pub struct CustomRpcClient {
    pub client: RpcClient,
    pub config: SendTransactionConfig,
}

impl Default for CustomRpcClient {
    fn default() -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(
                DEFAULT_RPC_URL.into(),
                CommitmentConfig::confirmed(),
            ),
            config: Default::default(),
        }
    }
}

impl CustomRpcClient {
    pub fn new(client: Option<RpcClient>, config: Option<SendTransactionConfig>) -> Self {
        match (client, config) {
            (Some(client), Some(config)) => Self { client, config },
            (client, config) => {
                let CustomRpcClient {
                    client: default_client,
                    config: default_config,
                } = Default::default();
                Self {
                    client: client.unwrap_or(default_client),
                    config: config.unwrap_or(default_config),
                }
            }
        }
    }

    pub fn new_from_url(url: &str, config: SendTransactionConfig) -> Self {
        CustomRpcClient {
            client: RpcClient::new_with_commitment(url.into(), CommitmentConfig::confirmed()),
            config,
        }
    }

    /// Sends and confirms a transaction paid for and signed by `payer`.
    pub async fn send_and_confirm_txn(
        &self,
        payer: &Wallet,
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        send_transaction_with_config(&self.client, payer, instructions, &self.config).await
    }

    pub fn debug_logs(&self) -> bool {
        matches!(self.config.debug_logs, Some(true))
    }
}

#[derive(Clone, Debug)]
pub struct SendTransactionConfig {
    /// Prepends compute unit limit/price instructions when set.
    pub compute_budget: Option<u32>,
    pub debug_logs: Option<bool>,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: Some(false),
        }
    }
}

/// Prepends the compute budget instructions, if any, to `instructions`.
pub fn with_compute_budget(
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> Vec<Instruction> {
    [
        config.compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat()
}

async fn send_transaction_with_config(
    rpc: &RpcClient,
    payer: &Wallet,
    instructions: &[Instruction],
    config: &SendTransactionConfig,
) -> anyhow::Result<Signature> {
    let bh = rpc.get_latest_blockhash().await?;

    let final_instructions = with_compute_budget(instructions, config);
    let msg = Message::new(&final_instructions, Some(&payer.public_key));

    let mut tx = Transaction::new_unsigned(msg);
    payer.sign_transaction(&mut tx, bh)?;

    let res = rpc.send_and_confirm_transaction(&tx).await;
    let debug_logs = matches!(config.debug_logs, Some(true));
    match res {
        Ok(signature) => {
            if debug_logs {
                print_kv!("Signature", signature, LogColor::Header);
                print_kv!("Payer", payer.public_key);
            }
            Ok(signature)
        }
        Err(error) => {
            if debug_logs {
                print_kv!("Failed transaction", error, LogColor::Error);
                print_kv!("Payer", payer.public_key, LogColor::Error);
            }
            Err(error.into())
        }
    }
}

/// Fetches the account at `address`, failing with [`BricksError::AccountNotFound`] when it
/// doesn't exist.
pub async fn fetch_account(rpc: &RpcClient, address: &Address) -> anyhow::Result<Account> {
    let account = rpc
        .get_account_with_commitment(address, rpc.commitment())
        .await?
        .value;

    require_account(account)
}

pub fn require_account(account: Option<Account>) -> anyhow::Result<Account> {
    account.ok_or_else(|| BricksError::AccountNotFound.into())
}

/// Fetches every account owned by `program_id` whose data starts with `discriminator`.
pub async fn fetch_program_accounts(
    rpc: &RpcClient,
    program_id: &Address,
    discriminator: Discriminator,
) -> anyhow::Result<Vec<(Address, Account)>> {
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_raw_bytes(
            0,
            discriminator.to_vec(),
        ))]),
        account_config: RpcAccountInfoConfig {
            commitment: Some(rpc.commitment()),
            encoding: Some(UiAccountEncoding::Base64),
            data_slice: None,
            min_context_slot: None,
        },
        with_context: Some(true),
        sort_results: Some(true),
    };

    Ok(rpc
        .get_program_accounts_with_config(program_id, config)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_budget_is_prepended() {
        let ixn = Instruction {
            program_id: bricks_interface::program::ID,
            accounts: vec![],
            data: vec![1, 2, 3],
        };

        let unchanged = with_compute_budget(std::slice::from_ref(&ixn), &Default::default());
        assert_eq!(unchanged, vec![ixn.clone()]);

        let budgeted = with_compute_budget(
            std::slice::from_ref(&ixn),
            &SendTransactionConfig {
                compute_budget: Some(200_000),
                debug_logs: None,
            },
        );
        assert_eq!(budgeted.len(), 3);
        assert_eq!(budgeted[2], ixn);
        assert_eq!(
            budgeted[0],
            ComputeBudgetInstruction::set_compute_unit_limit(200_000)
        );
    }

    #[test]
    fn missing_account_is_an_error() {
        let err = require_account(None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BricksError>(),
            Some(&BricksError::AccountNotFound)
        );
        assert!(require_account(Some(Account::default())).is_ok());
    }

    #[test]
    fn partial_construction_falls_back_to_defaults() {
        let rpc = CustomRpcClient::new(
            None,
            Some(SendTransactionConfig {
                compute_budget: Some(1),
                debug_logs: Some(true),
            }),
        );
        assert_eq!(rpc.client.url(), DEFAULT_RPC_URL);
        assert_eq!(rpc.client.commitment(), CommitmentConfig::confirmed());
        assert!(rpc.debug_logs());
        assert!(!CustomRpcClient::default().debug_logs());
    }
}
