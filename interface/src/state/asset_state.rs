//! See [`AssetState`].

use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use static_assertions::const_assert_eq;

use crate::{
    identifier::IdentifierBytes,
    pack::NAME_LEN,
    state::{
        AccountState,
        Discriminator,
        PubkeyBytes,
    },
};

const_assert_eq!(NAME_LEN, 32);

/// A key/value attribute of an asset, stored as raw UTF-8 bytes.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct AttributeState {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

/// A dated milestone in an asset's timeline.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Default, Eq, PartialEq)]
pub struct TimelineEntry {
    pub title: String,
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    pub description: String,
}

/// A purchasable asset. Created by `initialize_asset` at the PDA `["asset", creator, id]`.
///
/// Text fields hold raw UTF-8 bytes; `name` is null padded to [`NAME_LEN`] bytes.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
pub struct AssetState {
    /// The asset account's own address.
    pub key: PubkeyBytes,
    pub id: IdentifierBytes,
    pub name: [u8; NAME_LEN],
    pub location: Vec<u8>,
    pub attributes: Vec<AttributeState>,
    /// Links to images of the asset.
    pub images: Vec<Vec<u8>>,
    /// Link to a virtual tour of the asset.
    pub virtual_link: Vec<u8>,
    pub num_owners: u32,
    /// Unix timestamp in seconds after which the asset can no longer be bought.
    pub end_date_timestamp: i64,
    /// The nominal value of the asset in lamports.
    pub value: u64,
    /// The portion of `value` already purchased, in lamports.
    pub value_bought: u64,
    pub timeline: Vec<TimelineEntry>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl AccountState for AssetState {
    const DISCRIMINATOR: Discriminator = [233, 229, 132, 170, 169, 225, 98, 171];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::pad_fixed;

    #[test]
    fn asset_account_data_round_trip() {
        let asset = AssetState {
            key: [5; 32],
            id: [6; 16],
            name: pad_fixed("Villa").unwrap(),
            location: b"Lisbon".to_vec(),
            attributes: vec![AttributeState {
                key: b"rooms".to_vec(),
                value: b"4".to_vec(),
            }],
            images: vec![b"https://img/1.png".to_vec()],
            virtual_link: b"https://tour".to_vec(),
            num_owners: 3,
            end_date_timestamp: 1_900_000_000,
            value: 9_007_199_254_740_993,
            value_bought: 12,
            timeline: vec![TimelineEntry {
                title: "Listed".into(),
                timestamp: 1_700_000_000,
                description: "Asset went live".into(),
            }],
            created_at: 1_700_000_000,
            updated_at: 1_700_000_100,
        };

        let data = asset.to_account_data().unwrap();
        assert_eq!(&data[..8], &AssetState::DISCRIMINATOR);
        // The fixed fields come straight after the discriminator.
        assert_eq!(&data[8..40], &[5; 32]);
        assert_eq!(&data[40..56], &[6; 16]);
        assert_eq!(&data[56..61], b"Villa");

        let decoded = AssetState::try_from_account_data(&data).unwrap();
        assert_eq!(decoded, asset);
        // Values above 2^53 survive untouched.
        assert_eq!(decoded.value, 9_007_199_254_740_993);
    }
}
