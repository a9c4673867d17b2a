//! Common error types and conversion helpers to represent them as error message strings.

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::FromRepr)]
#[repr(u8)]
pub enum BricksError {
    MissingConnection,
    MissingSigner,
    InvalidIdentifier,
    InvalidIdentifierLength,
    FieldTooLong,
    InvalidAddress,
    AccountNotFound,
    InvalidAccountOwner,
    InvalidAccountDiscriminant,
    InvalidAccountData,
    OwnershipListMismatch,
    InvalidInstructionTag,
    InvalidInstructionData,
}

impl From<BricksError> for &'static str {
    fn from(value: BricksError) -> Self {
        match value {
            BricksError::MissingConnection => "Failed to construct BricksProgram: no connection",
            BricksError::MissingSigner => {
                "Can't use this function without initializing BricksProgram with a public key and \
                 a transaction signer"
            }
            BricksError::InvalidIdentifier => "Identifier must be a hyphenated UUID string",
            BricksError::InvalidIdentifierLength => "Input must be a byte array of length 16",
            BricksError::FieldTooLong => "Field is longer than its fixed width",
            BricksError::InvalidAddress => "Invalid base58 account address",
            BricksError::AccountNotFound => "Account not found",
            BricksError::InvalidAccountOwner => "Account isn't owned by the bricks program",
            BricksError::InvalidAccountDiscriminant => "Invalid account discriminant",
            BricksError::InvalidAccountData => "Account data couldn't be decoded",
            BricksError::OwnershipListMismatch => {
                "Owned assets and ownership amounts have different lengths"
            }
            BricksError::InvalidInstructionTag => "Invalid instruction tag",
            BricksError::InvalidInstructionData => "Instruction data is invalid",
        }
    }
}

impl core::fmt::Display for BricksError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str((*self).into())
    }
}

impl std::error::Error for BricksError {}

pub type BricksResult<T = ()> = Result<T, BricksError>;
