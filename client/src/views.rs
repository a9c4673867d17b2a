//! Read-only views decoding `bricks` program accounts into caller-facing records.
//!
//! All 64-bit on-chain integers are kept as `u64`/`i64`, so values past 2^53 are represented
//! exactly.

use bricks_interface::{
    error::BricksError,
    identifier::bytes_to_uuid,
    pack::bytes_to_string,
    state::{
        asset_state::{
            AssetState,
            AttributeState,
            TimelineEntry,
        },
        user_state::UserState,
        AccountState,
        PubkeyBytes,
    },
};
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};
use solana_address::Address;

use crate::{
    fmt_kv,
    logs::fmt_divider,
    LogColor,
};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub key: String,
    pub id: String,
    pub owned_assets: Vec<String>,
    /// Share amounts, index-aligned with `owned_assets`.
    pub ownership_amounts: Vec<u64>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AssetAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AssetTimeline {
    pub title: String,
    pub timestamp: i64,
    pub description: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub key: String,
    pub id: String,
    pub name: String,
    pub location: String,
    pub attributes: Vec<AssetAttribute>,
    pub images: Vec<String>,
    pub virtual_link: String,
    pub num_owners: u32,
    pub end_date_timestamp: i64,
    pub value: u64,
    pub value_bought: u64,
    pub timeline: Vec<AssetTimeline>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// A divider followed by the record's key fields, for debug logs.
    pub fn fmt_summary(&self) -> String {
        [
            fmt_divider(),
            fmt_kv!("User", self.key, LogColor::Info),
            fmt_kv!("Id", self.id),
            fmt_kv!("Owned assets", self.owned_assets.len()),
        ]
        .join("\n")
    }
}

impl Asset {
    /// A divider followed by the record's key fields, for debug logs.
    pub fn fmt_summary(&self) -> String {
        [
            fmt_divider(),
            fmt_kv!("Asset", self.key, LogColor::Info),
            fmt_kv!("Name", self.name),
            fmt_kv!(
                "Value bought",
                format!("{}/{}", self.value_bought, self.value)
            ),
        ]
        .join("\n")
    }
}

fn address_string(bytes: PubkeyBytes) -> String {
    Address::new_from_array(bytes).to_string()
}

impl From<AttributeState> for AssetAttribute {
    fn from(attribute: AttributeState) -> Self {
        Self {
            key: bytes_to_string(&attribute.key),
            value: bytes_to_string(&attribute.value),
        }
    }
}

impl From<TimelineEntry> for AssetTimeline {
    fn from(entry: TimelineEntry) -> Self {
        Self {
            title: entry.title,
            timestamp: entry.timestamp,
            description: entry.description,
        }
    }
}

impl From<AssetTimeline> for TimelineEntry {
    fn from(entry: AssetTimeline) -> Self {
        Self {
            title: entry.title,
            timestamp: entry.timestamp,
            description: entry.description,
        }
    }
}

impl TryFrom<UserState> for User {
    type Error = BricksError;

    fn try_from(state: UserState) -> Result<Self, Self::Error> {
        if state.owned_assets.len() != state.ownership_amounts.len() {
            return Err(BricksError::OwnershipListMismatch);
        }

        Ok(Self {
            key: address_string(state.key),
            id: bytes_to_uuid(&state.id)?,
            owned_assets: state.owned_assets.into_iter().map(address_string).collect(),
            ownership_amounts: state.ownership_amounts,
        })
    }
}

impl TryFrom<AssetState> for Asset {
    type Error = BricksError;

    fn try_from(state: AssetState) -> Result<Self, Self::Error> {
        Ok(Self {
            key: address_string(state.key),
            id: bytes_to_uuid(&state.id)?,
            name: bytes_to_string(&state.name),
            location: bytes_to_string(&state.location),
            attributes: state.attributes.into_iter().map_into().collect(),
            images: state
                .images
                .iter()
                .map(|link| bytes_to_string(link))
                .collect(),
            virtual_link: bytes_to_string(&state.virtual_link),
            num_owners: state.num_owners,
            end_date_timestamp: state.end_date_timestamp,
            value: state.value,
            value_bought: state.value_bought,
            timeline: state.timeline.into_iter().map_into().collect(),
            created_at: state.created_at,
            updated_at: state.updated_at,
        })
    }
}

fn check_owner(program_id: &Address, account_owner: &Address) -> Result<(), BricksError> {
    if account_owner != program_id {
        return Err(BricksError::InvalidAccountOwner);
    }
    Ok(())
}

/// Attempts to decode a user account from raw account fields.
///
/// Validates that `account_owner` is `program_id`, that the data carries the `UserState`
/// discriminator, and that the ownership lists line up.
pub fn try_user_from_owner_and_data(
    program_id: &Address,
    account_owner: &Address,
    account_data: &[u8],
) -> Result<User, BricksError> {
    check_owner(program_id, account_owner)?;
    UserState::try_from_account_data(account_data)?.try_into()
}

/// Attempts to decode an asset account from raw account fields. See
/// [`try_user_from_owner_and_data`].
pub fn try_asset_from_owner_and_data(
    program_id: &Address,
    account_owner: &Address,
    account_data: &[u8],
) -> Result<Asset, BricksError> {
    check_owner(program_id, account_owner)?;
    AssetState::try_from_account_data(account_data)?.try_into()
}
