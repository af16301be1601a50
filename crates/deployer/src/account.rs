use {
    anyhow::{Context, Result},
    network::Network,
    starknet::{
        accounts::{ExecutionEncoding, SingleOwnerAccount},
        core::types::Felt,
        providers::{
            Provider,
            jsonrpc::{HttpTransport, JsonRpcClient},
        },
        signers::{LocalWallet, SigningKey},
    },
    url::Url,
};

/// The account type used to sign and submit every transaction of a run.
pub type DeployerAccount = SingleOwnerAccount<JsonRpcClient<HttpTransport>, LocalWallet>;

/// Creates a JSON-RPC client bound to the network's node endpoint.
pub fn provider(network: Network) -> Result<JsonRpcClient<HttpTransport>> {
    let url = network
        .rpc_url()
        .with_context(|| format!("network {network} has no RPC URL configured"))?;
    let url = Url::parse(url).with_context(|| format!("parse RPC URL {url}"))?;
    Ok(JsonRpcClient::new(HttpTransport::new(url)))
}

/// Creates the account identity used for all submissions. The chain id is
/// fetched from the node and calldata is encoded the Cairo 1 way. The key
/// format is not validated; a bad key fails at signing time.
pub async fn account(
    provider: JsonRpcClient<HttpTransport>,
    address: Felt,
    private_key: Felt,
) -> Result<DeployerAccount> {
    let chain_id = provider.chain_id().await.context("fetch chain id")?;
    let signer = LocalWallet::from_signing_key(SigningKey::from_secret_scalar(private_key));
    Ok(SingleOwnerAccount::new(
        provider,
        signer,
        address,
        chain_id,
        ExecutionEncoding::New,
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creates_provider_for_devnet() {
        assert!(provider(Network::Devnet).is_ok());
    }

    #[test]
    fn fails_for_network_without_rpc_url() {
        let err = provider(Network::Mainnet).unwrap_err();
        assert!(err.to_string().contains("no RPC URL"));
    }
}
