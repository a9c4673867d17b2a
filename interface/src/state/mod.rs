//! Account layouts owned by the `bricks` program.
//!
//! Every account is an 8 byte discriminator followed by the Borsh encoding of its fields in
//! declaration order. The discriminator is the first 8 bytes of `sha256("account:<TypeName>")`.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;

use crate::error::BricksError;

pub mod asset_state;
pub mod user_state;

pub const DISCRIMINATOR_LEN: usize = 8;
pub const PUBKEY_LEN: usize = 32;

/// Alias type for an account or instruction discriminator.
pub type Discriminator = [u8; DISCRIMINATOR_LEN];
/// Alias type for a public key stored as raw bytes inside account data.
pub type PubkeyBytes = [u8; PUBKEY_LEN];

pub const SYSTEM_PROGRAM_ID: Address = Address::from_str_const("11111111111111111111111111111111");

/// A Borsh-encoded account kind tagged by a fixed discriminator.
pub trait AccountState: BorshSerialize + BorshDeserialize {
    const DISCRIMINATOR: Discriminator;

    /// Decodes account data, checking the discriminator first.
    ///
    /// Trailing bytes after the encoded fields are ignored, since accounts are usually allocated
    /// with more space than their current contents need.
    fn try_from_account_data(data: &[u8]) -> Result<Self, BricksError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(BricksError::InvalidAccountData);
        }

        let (discriminator, mut fields) = data.split_at(DISCRIMINATOR_LEN);
        if discriminator != Self::DISCRIMINATOR.as_slice() {
            return Err(BricksError::InvalidAccountDiscriminant);
        }

        Self::deserialize(&mut fields).map_err(|_| BricksError::InvalidAccountData)
    }

    /// Encodes `self` the way the program stores it, discriminator included.
    fn to_account_data(&self) -> Result<Vec<u8>, BricksError> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        self.serialize(&mut data)
            .map_err(|_| BricksError::InvalidAccountData)?;

        Ok(data)
    }
}
