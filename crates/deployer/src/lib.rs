pub mod account;
pub mod arguments;
pub mod artifact;
pub mod calldata;
pub mod deploy;

use {anyhow::Result, deploy::Deployer};

pub async fn main(args: arguments::Arguments) -> Result<()> {
    let provider = account::provider(args.network)?;
    let account = account::account(provider, args.account_address, args.account_private_key).await?;
    let deployer = Deployer::new(account, args.owner_address);

    tracing::info!("Deploying Token Bundler contract");
    deployer.deploy_bundler(&args.bundler_path).await?;

    tracing::info!("Deploying Mock ERC20 contract");
    deployer.deploy_mock_erc20(&args.erc20_path).await?;

    // must use an account with an ERC721 receiver
    tracing::info!("Deploying Mock ERC721 contract");
    deployer.deploy_mock_erc721(&args.erc721_path).await?;

    // must use an account with an ERC1155 receiver
    tracing::info!("Deploying Mock ERC1155 contract");
    deployer.deploy_mock_erc1155(&args.erc1155_path).await?;

    Ok(())
}
