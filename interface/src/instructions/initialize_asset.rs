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
    identifier::IdentifierBytes,
    instructions::{
        pack_instruction_data,
        BricksInstruction,
    },
    pack::NAME_LEN,
    state::asset_state::{
        AttributeState,
        TimelineEntry,
    },
};

/// Creates an asset account PDA owned by the program.
///
/// ### Accounts
///   0. `[WRITE]` Asset account PDA, seeds `["asset", user, id]`
///   1. `[WRITE, SIGNER]` User creating and paying for the asset
///   2. `[READ]` System program
pub struct InitializeAsset {
    /// The asset account PDA.
    pub asset_account: Address,
    /// The signer creating and paying for the asset account.
    pub user: Address,
    /// The system program.
    pub system_program: Address,
}

/// Arguments of `initialize_asset`, in the order the program reads them.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct InitializeAssetInstructionData {
    pub id: IdentifierBytes,
    /// Null padded to [`NAME_LEN`] bytes.
    pub name: [u8; NAME_LEN],
    pub location: Vec<u8>,
    pub attributes: Vec<AttributeState>,
    pub images: Vec<Vec<u8>>,
    pub virtual_link: Vec<u8>,
    pub end_date_timestamp: i64,
    pub value: u64,
    pub timeline: Vec<TimelineEntry>,
    /// Reserved by the program for future use. Always sent empty.
    pub extensions: Vec<Vec<u8>>,
}

impl InitializeAsset {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.asset_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn create_instruction(
        &self,
        program_id: Address,
        data: &InitializeAssetInstructionData,
    ) -> Result<Instruction, BricksError> {
        Ok(Instruction {
            program_id,
            accounts: self.create_account_metas().to_vec(),
            data: pack_instruction_data(BricksInstruction::InitializeAsset, data)?,
        })
    }
}
