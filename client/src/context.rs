//! Program-level context for building `bricks` instructions from caller-facing parameters.

use std::str::FromStr;

use bricks_interface::{
    error::BricksError,
    identifier::uuid_to_bytes,
    instructions::{
        AddUser,
        AddUserInstructionData,
        BuyAsset,
        BuyAssetInstructionData,
        InitializeAsset,
        InitializeAssetInstructionData,
    },
    pack::pad_fixed,
    program,
    state::{
        asset_state::AttributeState,
        SYSTEM_PROGRAM_ID,
    },
};
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};
use solana_address::Address;
use solana_instruction::Instruction;

use crate::{
    pda::{
        find_asset_address,
        find_user_address,
    },
    views::{
        AssetAttribute,
        AssetTimeline,
    },
};

/// The recipient of every `buy_asset` payment unless configured otherwise.
pub const DEFAULT_PURCHASE_RECIPIENT: Address =
    Address::from_str_const("6epEHHWCeLYYqiprybDARQsXoG8cbmNDNVGHMnLy1z9t");

/// Parameters for creating an asset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AddAsset {
    /// Asset identifier as a hyphenated UUID.
    pub id: String,
    /// At most 32 bytes of UTF-8.
    pub name: String,
    pub location: String,
    pub attributes: Vec<AssetAttribute>,
    /// Links to images.
    pub images: Vec<String>,
    /// Link to a virtual tour.
    pub virtual_link: String,
    pub end_date_timestamp: i64,
    /// Nominal value in lamports.
    pub value: u64,
    pub timeline: Vec<AssetTimeline>,
}

/// Parameters for buying shares of an asset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BuyAssetParams {
    /// The user account receiving the shares, base58.
    pub user_account: String,
    /// The asset being bought, base58.
    pub asset_key: String,
    /// The number of shares to buy.
    pub amount: u64,
}

/// The outcome of a creation: the transaction signature and the derived account address.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CreatedAccount {
    pub hash: String,
    pub key: String,
}

pub fn parse_address(address: &str) -> Result<Address, BricksError> {
    Address::from_str(address).map_err(|_| BricksError::InvalidAddress)
}

impl AddAsset {
    /// Encodes the parameters as `initialize_asset` arguments.
    ///
    /// Fails if the identifier is malformed or the name doesn't fit its fixed width.
    pub fn to_instruction_data(&self) -> Result<InitializeAssetInstructionData, BricksError> {
        Ok(InitializeAssetInstructionData {
            id: uuid_to_bytes(&self.id)?,
            name: pad_fixed(&self.name)?,
            location: self.location.as_bytes().to_vec(),
            attributes: self
                .attributes
                .iter()
                .map(|AssetAttribute { key, value }| AttributeState {
                    key: key.as_bytes().to_vec(),
                    value: value.as_bytes().to_vec(),
                })
                .collect(),
            images: self
                .images
                .iter()
                .map(|link| link.as_bytes().to_vec())
                .collect(),
            virtual_link: self.virtual_link.as_bytes().to_vec(),
            end_date_timestamp: self.end_date_timestamp,
            value: self.value,
            timeline: self.timeline.iter().cloned().map_into().collect(),
            extensions: vec![],
        })
    }
}

/// A struct containing the program deployment a client talks to.
///
/// Implements helper methods for building all program instructions using those values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgramContext {
    pub program_id: Address,
    /// Receives the payment of every `buy_asset`.
    pub purchase_recipient: Address,
}

impl Default for ProgramContext {
    fn default() -> Self {
        Self {
            program_id: program::ID,
            purchase_recipient: DEFAULT_PURCHASE_RECIPIENT,
        }
    }
}

impl ProgramContext {
    pub fn new(program_id: Address, purchase_recipient: Address) -> Self {
        Self {
            program_id,
            purchase_recipient,
        }
    }

    /// Builds `add_user` for the user `user_id` created by `user`. Returns the instruction and
    /// the derived user account.
    pub fn add_user(
        &self,
        user: Address,
        user_id: &str,
    ) -> Result<(Instruction, Address), BricksError> {
        let id = uuid_to_bytes(user_id)?;
        let (user_account, _bump) = find_user_address(&self.program_id, &user, &id);

        let instruction = AddUser {
            user_account,
            user,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(self.program_id, &AddUserInstructionData::new(id))?;

        Ok((instruction, user_account))
    }

    /// Builds `initialize_asset` for an asset created by `user`. Returns the instruction and the
    /// derived asset account.
    pub fn initialize_asset(
        &self,
        user: Address,
        params: &AddAsset,
    ) -> Result<(Instruction, Address), BricksError> {
        let data = params.to_instruction_data()?;
        let (asset_account, _bump) = find_asset_address(&self.program_id, &user, &data.id);

        let instruction = InitializeAsset {
            asset_account,
            user,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(self.program_id, &data)?;

        Ok((instruction, asset_account))
    }

    /// Builds `buy_asset`, paying [`ProgramContext::purchase_recipient`].
    pub fn buy_asset(&self, params: &BuyAssetParams) -> Result<Instruction, BricksError> {
        let asset = parse_address(&params.asset_key)?;
        let user = parse_address(&params.user_account)?;

        BuyAsset {
            recipient: self.purchase_recipient,
            asset,
            user,
            system_program: SYSTEM_PROGRAM_ID,
        }
        .create_instruction(
            self.program_id,
            &BuyAssetInstructionData::new(&asset, params.amount),
        )
    }
}

#[cfg(test)]
mod tests {
    use bricks_interface::{
        instructions::{
            unpack_instruction_data,
            BricksInstruction,
        },
        pack::bytes_to_string,
        state::asset_state::TimelineEntry,
    };

    use super::*;

    const ID: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn villa() -> AddAsset {
        AddAsset {
            id: ID.into(),
            name: "Villa".into(),
            location: "Lisbon".into(),
            attributes: vec![AssetAttribute {
                key: "rooms".into(),
                value: "4".into(),
            }],
            images: vec!["https://img/1.png".into()],
            virtual_link: "https://tour/1".into(),
            end_date_timestamp: 1_893_456_000,
            value: 9_007_199_254_740_993,
            timeline: vec![AssetTimeline {
                title: "Listed".into(),
                timestamp: 1_700_000_000,
                description: "Open for purchase".into(),
            }],
        }
    }

    #[test]
    fn encodes_asset_parameters() {
        let data = villa().to_instruction_data().unwrap();

        assert_eq!(&data.name[..5], b"Villa");
        assert!(data.name[5..].iter().all(|b| *b == 0));
        assert_eq!(bytes_to_string(&data.name), "Villa");
        assert_eq!(data.location, b"Lisbon");
        assert_eq!(data.attributes[0].key, b"rooms");
        assert_eq!(data.images, vec![b"https://img/1.png".to_vec()]);
        assert_eq!(data.value, 9_007_199_254_740_993);
        assert_eq!(
            data.timeline,
            vec![TimelineEntry {
                title: "Listed".into(),
                timestamp: 1_700_000_000,
                description: "Open for purchase".into(),
            }]
        );
        assert!(data.extensions.is_empty());
    }

    #[test]
    fn long_names_are_rejected() {
        let mut params = villa();
        params.name = "x".repeat(33);
        assert_eq!(
            params.to_instruction_data(),
            Err(BricksError::FieldTooLong)
        );
    }

    #[test]
    fn add_user_targets_derived_account() {
        let ctx = ProgramContext::default();
        let user = Address::new_from_array([3; 32]);
        let (instruction, user_account) = ctx.add_user(user, ID).unwrap();

        let id = uuid_to_bytes(ID).unwrap();
        assert_eq!(user_account, find_user_address(&program::ID, &user, &id).0);
        assert_eq!(instruction.accounts[0].pubkey, user_account);
        assert_eq!(instruction.accounts[1].pubkey, user);
        assert!(instruction.accounts[1].is_signer);
        assert_eq!(instruction.accounts[2].pubkey, SYSTEM_PROGRAM_ID);
        assert_eq!(
            unpack_instruction_data::<AddUserInstructionData>(
                BricksInstruction::AddUser,
                &instruction.data
            ),
            Ok(AddUserInstructionData::new(id))
        );
    }

    #[test]
    fn initialize_asset_targets_derived_account() {
        let ctx = ProgramContext::default();
        let user = Address::new_from_array([3; 32]);
        let (instruction, asset_account) = ctx.initialize_asset(user, &villa()).unwrap();

        let id = uuid_to_bytes(ID).unwrap();
        assert_eq!(asset_account, find_asset_address(&program::ID, &user, &id).0);
        assert_ne!(asset_account, ctx.add_user(user, ID).unwrap().1);
        assert_eq!(instruction.accounts[0].pubkey, asset_account);
    }

    #[test]
    fn buy_asset_pays_configured_recipient() {
        let recipient = Address::new_from_array([9; 32]);
        let ctx = ProgramContext::new(program::ID, recipient);
        let asset = Address::new_from_array([4; 32]);
        let user = Address::new_from_array([5; 32]);
        let instruction = ctx
            .buy_asset(&BuyAssetParams {
                user_account: user.to_string(),
                asset_key: asset.to_string(),
                amount: 7,
            })
            .unwrap();

        let keys = instruction
            .accounts
            .iter()
            .map(|meta| meta.pubkey)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec![recipient, asset, user, SYSTEM_PROGRAM_ID]);
        assert_eq!(
            ProgramContext::default().purchase_recipient,
            DEFAULT_PURCHASE_RECIPIENT
        );
    }

    #[test]
    fn malformed_addresses_are_rejected() {
        let err = ProgramContext::default()
            .buy_asset(&BuyAssetParams {
                user_account: "not base58 0OIl".into(),
                asset_key: DEFAULT_PURCHASE_RECIPIENT.to_string(),
                amount: 1,
            })
            .unwrap_err();
        assert_eq!(err, BricksError::InvalidAddress);
        assert_eq!(parse_address(""), Err(BricksError::InvalidAddress));
    }
}
