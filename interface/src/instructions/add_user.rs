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
};

/// Creates a user account PDA owned by the program.
///
/// ### Accounts
///   0. `[WRITE]` User account PDA, seeds `["user", user, id]`
///   1. `[WRITE, SIGNER]` User paying for the account
///   2. `[READ]` System program
pub struct AddUser {
    /// The user account PDA.
    pub user_account: Address,
    /// The signer creating and paying for the user account.
    pub user: Address,
    /// The system program.
    pub system_program: Address,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct AddUserInstructionData {
    /// The user's identifier, also the last PDA seed.
    pub id: IdentifierBytes,
}

impl AddUserInstructionData {
    pub fn new(id: IdentifierBytes) -> Self {
        Self { id }
    }
}

impl AddUser {
    pub fn create_account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.user_account, false),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }

    pub fn create_instruction(
        &self,
        program_id: Address,
        data: &AddUserInstructionData,
    ) -> Result<Instruction, BricksError> {
        Ok(Instruction {
            program_id,
            accounts: self.create_account_metas().to_vec(),
            data: pack_instruction_data(BricksInstruction::AddUser, data)?,
        })
    }
}
