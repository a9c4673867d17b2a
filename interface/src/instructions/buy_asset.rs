use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_address::Address;
use solana_instruction::{
    AccountMeta,
    Instruction,
};

use crate::{
    error::BricksError,
    instructions::{
        pack_instruction_data,
        BricksInstruction,
    },
    state::PubkeyBytes,
};

/// Buys `amount` of an asset on behalf of a user account. Payment goes to `recipient`.
///
/// No signer other than the transaction's fee payer is required.
///
/// ### Accounts
///   0. `[WRITE]` Payment recipient
///   1. `[WRITE]` Asset account
///   2. `[WRITE]` User account receiving the shares
///   3. `[READ]` System program
pub struct BuyAsset {
    pub recipient: Address,
    pub asset: Address,
    pub user: Address,
    pub system_program: Address,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct BuyAssetInstructionData {
    /// The asset being bought; repeats account 1.
    pub asset: PubkeyBytes,
    /// The share amount to buy.
    pub amount: u64,
}

impl BuyAssetInstructionData {
    pub fn new(asset: &Address, amount: u64) -> Self {
        Self {
            asset: asset.to_bytes(),
            amount,
        }
    }
}

impl BuyAsset {
    pub fn create_account_metas(&self) -> [AccountMeta; 4] {
        [
            AccountMeta::new(self.recipient, false),
            AccountMeta::new(self.asset, false),
            AccountMeta::new(self.user, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn create_instruction(
        &self,
        program_id: Address,
        data: &BuyAssetInstructionData,
    ) -> Result<Instruction, BricksError> {
        Ok(Instruction {
            program_id,
            accounts: self.create_account_metas().to_vec(),
            data: pack_instruction_data(BricksInstruction::BuyAsset, data)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_asset_layout() {
        let asset = Address::new_from_array([1; 32]);
        let data = BuyAssetInstructionData::new(&asset, 250);
        let instruction = BuyAsset {
            recipient: Address::new_from_array([2; 32]),
            asset,
            user: Address::new_from_array([3; 32]),
            system_program: crate::state::SYSTEM_PROGRAM_ID,
        }
        .create_instruction(crate::program::ID, &data)
        .unwrap();

        // 8 byte tag + 32 byte asset + u64 amount.
        assert_eq!(instruction.data.len(), 48);
        assert_eq!(&instruction.data[8..40], asset.as_ref());
        assert_eq!(&instruction.data[40..], &250u64.to_le_bytes());
        assert!(instruction.accounts.iter().all(|meta| !meta.is_signer));
        assert!(!instruction.accounts[3].is_writable);
    }
}
