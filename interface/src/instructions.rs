//! Definitions of all program instructions the client can build.
//!
//! Instruction data is an 8 byte tag (the first 8 bytes of `sha256("global:<snake_case_name>")`)
//! followed by the Borsh encoding of the instruction's arguments.

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::{
    error::BricksError,
    state::{
        Discriminator,
        DISCRIMINATOR_LEN,
    },
};

pub mod add_user;
pub mod buy_asset;
pub mod initialize_asset;

pub use add_user::*;
pub use buy_asset::*;
pub use initialize_asset::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[strum(serialize_all = "snake_case")]
pub enum BricksInstruction {
    AddUser,
    InitializeAsset,
    BuyAsset,
}

impl BricksInstruction {
    pub const fn tag(&self) -> Discriminator {
        match self {
            BricksInstruction::AddUser => [15, 200, 3, 168, 184, 41, 189, 176],
            BricksInstruction::InitializeAsset => [214, 153, 49, 248, 95, 248, 208, 179],
            BricksInstruction::BuyAsset => [197, 37, 177, 1, 180, 23, 175, 98],
        }
    }
}

impl TryFrom<&[u8]> for BricksInstruction {
    type Error = BricksError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let tag = data
            .get(..DISCRIMINATOR_LEN)
            .ok_or(BricksError::InvalidInstructionData)?;
        [
            BricksInstruction::AddUser,
            BricksInstruction::InitializeAsset,
            BricksInstruction::BuyAsset,
        ]
        .into_iter()
        .find(|instruction| instruction.tag().as_slice() == tag)
        .ok_or(BricksError::InvalidInstructionTag)
    }
}

/// Packs the instruction tag followed by the Borsh encoded arguments.
pub fn pack_instruction_data<T: BorshSerialize>(
    instruction: BricksInstruction,
    args: &T,
) -> Result<Vec<u8>, BricksError> {
    let mut data = instruction.tag().to_vec();
    args.serialize(&mut data)
        .map_err(|_| BricksError::InvalidInstructionData)?;

    Ok(data)
}

/// Checks the instruction tag and decodes the arguments that follow it.
pub fn unpack_instruction_data<T: BorshDeserialize>(
    instruction: BricksInstruction,
    data: &[u8],
) -> Result<T, BricksError> {
    if BricksInstruction::try_from(data)? != instruction {
        return Err(BricksError::InvalidInstructionTag);
    }

    borsh::from_slice(&data[DISCRIMINATOR_LEN..]).map_err(|_| BricksError::InvalidInstructionData)
}

#[cfg(test)]
mod tests {
    use sha2::{
        Digest,
        Sha256,
    };
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn tags_match_sighash_of_snake_case_names() {
        for instruction in BricksInstruction::iter() {
            let hash = Sha256::digest(format!("global:{instruction}").as_bytes());
            assert_eq!(instruction.tag().as_slice(), &hash[..DISCRIMINATOR_LEN]);
        }
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(BricksInstruction::InitializeAsset.to_string(), "initialize_asset");
    }

    #[test]
    fn tag_try_from_round_trip() {
        for instruction in BricksInstruction::iter() {
            let tag = instruction.tag();
            assert_eq!(BricksInstruction::try_from(tag.as_slice()), Ok(instruction));
        }
        assert_eq!(
            BricksInstruction::try_from([0u8; 8].as_slice()),
            Err(BricksError::InvalidInstructionTag)
        );
        assert_eq!(
            BricksInstruction::try_from([15u8, 200].as_slice()),
            Err(BricksError::InvalidInstructionData)
        );
    }

    #[test]
    fn unpack_rejects_other_instruction() {
        let data = pack_instruction_data(BricksInstruction::AddUser, &[1u8; 16]).unwrap();
        assert_eq!(
            unpack_instruction_data::<[u8; 16]>(BricksInstruction::BuyAsset, &data),
            Err(BricksError::InvalidInstructionTag)
        );
        assert_eq!(
            unpack_instruction_data::<[u8; 16]>(BricksInstruction::AddUser, &data),
            Ok([1u8; 16])
        );
    }
}
