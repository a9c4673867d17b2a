//! Runs against a local validator with the `bricks` program deployed at its default address.

use bricks_client::{
    transactions::CustomRpcClient,
    AddAsset,
    AssetAttribute,
    AssetTimeline,
    BricksProgram,
    BuyAssetParams,
    ProgramContext,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

const USER_ID: &str = "0b6f2a6e-4c1d-4a8e-9f3b-7d2c5e8a1f40";
const ASSET_ID: &str = "5c9e1d7a-2b4f-4e6c-8a3d-1f0b9e7c6a52";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let payer = Keypair::new();
    let rpc = CustomRpcClient::default();
    let airdrop = rpc
        .client
        .request_airdrop(&payer.pubkey(), 10_000_000_000)
        .await?;
    rpc.client.poll_for_signature(&airdrop).await?;

    // A fresh payer every run, so the derived accounts never collide.
    let program = BricksProgram::with_keypair(rpc, payer, ProgramContext::default());

    let user = program.initialize_user(USER_ID).await?;
    let asset = program
        .initialize_asset(&AddAsset {
            id: ASSET_ID.into(),
            name: "Villa".into(),
            location: "Lisbon".into(),
            attributes: vec![AssetAttribute {
                key: "rooms".into(),
                value: "4".into(),
            }],
            images: vec!["https://example.com/villa.png".into()],
            virtual_link: "https://example.com/villa/tour".into(),
            end_date_timestamp: 1_893_456_000,
            value: 1_000,
            timeline: vec![AssetTimeline {
                title: "Listed".into(),
                timestamp: 1_700_000_000,
                description: "Open for purchase".into(),
            }],
        })
        .await?;

    program
        .buy_asset(&BuyAssetParams {
            user_account: user.key.clone(),
            asset_key: asset.key.clone(),
            amount: 250,
        })
        .await?;

    let fetched_user = program.fetch_user(&user.key).await?;
    assert_eq!(fetched_user.id, USER_ID);
    assert_eq!(fetched_user.owned_assets, vec![asset.key.clone()]);
    assert_eq!(fetched_user.ownership_amounts, vec![250]);

    let fetched_asset = program.fetch_asset(&asset.key).await?;
    assert_eq!(fetched_asset.name, "Villa");
    assert_eq!(fetched_asset.value_bought, 250);
    assert_eq!(fetched_asset.num_owners, 1);

    assert!(program
        .fetch_all_assets()
        .await?
        .iter()
        .any(|listed| listed.key == asset.key));

    Ok(())
}
