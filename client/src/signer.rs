//! The signing context: a public key paired with something that can sign transactions for it.

use std::{
    fmt,
    sync::Arc,
};

use solana_address::Address;
use solana_keypair::Keypair;
use solana_sdk::{
    hash::Hash,
    signature::Signer,
    transaction::Transaction,
};

/// Signs a transaction on behalf of a wallet.
///
/// Implemented for [`Keypair`] directly. External signers (hardware wallets, remote signing
/// services, ...) can be adapted with [`SignerFn`].
pub trait SignTransaction {
    fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> anyhow::Result<()>;
}

impl SignTransaction for Keypair {
    fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> anyhow::Result<()> {
        transaction.try_sign(&[self], recent_blockhash)?;
        Ok(())
    }
}

/// Adapts a closure into a [`SignTransaction`] callback.
pub struct SignerFn<F>(pub F);

impl<F> SignTransaction for SignerFn<F>
where
    F: Fn(&mut Transaction, Hash) -> anyhow::Result<()>,
{
    fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> anyhow::Result<()> {
        (self.0)(transaction, recent_blockhash)
    }
}

pub type TransactionSigner = Arc<dyn SignTransaction + Send + Sync>;

/// A bound signing context. The public key is the fee payer of every transaction it signs.
#[derive(Clone)]
pub struct Wallet {
    pub public_key: Address,
    signer: TransactionSigner,
}

impl Wallet {
    pub fn new(public_key: Address, signer: TransactionSigner) -> Self {
        Self { public_key, signer }
    }

    pub fn from_keypair(keypair: Keypair) -> Self {
        Self::new(keypair.pubkey(), Arc::new(keypair))
    }

    pub fn sign_transaction(
        &self,
        transaction: &mut Transaction,
        recent_blockhash: Hash,
    ) -> anyhow::Result<()> {
        self.signer.sign_transaction(transaction, recent_blockhash)
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use solana_sdk::message::Message;

    use super::*;

    #[test]
    fn keypair_wallet_signs_as_fee_payer() {
        let wallet = Wallet::from_keypair(Keypair::new());
        let message = Message::new(&[], Some(&wallet.public_key));
        let mut transaction = Transaction::new_unsigned(message);

        wallet
            .sign_transaction(&mut transaction, Hash::default())
            .unwrap();
        assert!(transaction.is_signed());
        assert!(transaction.verify().is_ok());
    }

    #[test]
    fn closure_signer_is_called() {
        let keypair = Keypair::new();
        let public_key = keypair.pubkey();
        let wallet = Wallet::new(
            public_key,
            Arc::new(SignerFn(move |tx: &mut Transaction, hash: Hash| {
                keypair.sign_transaction(tx, hash)
            })),
        );
        let mut transaction = Transaction::new_unsigned(Message::new(&[], Some(&public_key)));

        wallet
            .sign_transaction(&mut transaction, Hash::default())
            .unwrap();
        assert!(transaction.is_signed());
    }

    #[test]
    fn signing_for_a_different_payer_fails() {
        let wallet = Wallet::from_keypair(Keypair::new());
        let other = Keypair::new().pubkey();
        let mut transaction = Transaction::new_unsigned(Message::new(&[], Some(&other)));

        assert!(wallet
            .sign_transaction(&mut transaction, Hash::default())
            .is_err());
    }
}
