//! See [`UserState`].

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::{
    identifier::IdentifierBytes,
    state::{
        AccountState,
        Discriminator,
        PubkeyBytes,
    },
};

/// A user's holdings. Created by `add_user` at the PDA `["user", creator, id]`.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct UserState {
    /// The user account's own address.
    pub key: PubkeyBytes,
    pub id: IdentifierBytes,
    /// Addresses of the assets the user holds shares in.
    pub owned_assets: Vec<PubkeyBytes>,
    /// Share amounts, index-aligned with `owned_assets`.
    pub ownership_amounts: Vec<u64>,
}

impl AccountState for UserState {
    const DISCRIMINATOR: Discriminator = [72, 177, 85, 249, 76, 167, 186, 126];
}
