use {
    clap::Parser,
    network::Network,
    starknet::core::types::Felt,
    std::path::PathBuf,
};

#[derive(Parser)]
pub struct Arguments {
    /// Name of the Starknet network to deploy to.
    #[clap(long, env = "STARKNET_NETWORK", default_value = "devnet")]
    pub network: Network,

    /// Address of the account submitting the declare and deploy transactions.
    #[clap(long, env = "STARKNET_ACCOUNT_ADDRESS", value_parser = felt_from_hex)]
    pub account_address: Felt,

    /// Private key of the submitting account.
    #[clap(
        long,
        env = "STARKNET_ACCOUNT_PRIVATE_KEY",
        value_parser = felt_from_hex,
        hide_env_values = true
    )]
    pub account_private_key: Felt,

    /// Address that becomes the owner of the bundler and the ERC721 mock and
    /// receives the initial ERC20/ERC1155 token balances.
    #[clap(long, env = "OWNER_ADDRESS", value_parser = felt_from_hex)]
    pub owner_address: Felt,

    /// Path to the compiled token bundler contract class.
    #[clap(long, env = "PATH_TO_CASM_COMPILE")]
    pub bundler_path: PathBuf,

    /// Path to the compiled mock ERC20 contract class.
    #[clap(long, env = "ERC20_PATH")]
    pub erc20_path: PathBuf,

    /// Path to the compiled mock ERC721 contract class.
    #[clap(long, env = "ERC721_PATH")]
    pub erc721_path: PathBuf,

    /// Path to the compiled mock ERC1155 contract class.
    #[clap(long, env = "ERC1155_PATH")]
    pub erc1155_path: PathBuf,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "network: {}", self.network)?;
        writeln!(f, "account_address: {:#x}", self.account_address)?;
        writeln!(f, "account_private_key: SECRET")?;
        writeln!(f, "owner_address: {:#x}", self.owner_address)?;
        writeln!(f, "bundler_path: {}", self.bundler_path.display())?;
        writeln!(f, "erc20_path: {}", self.erc20_path.display())?;
        writeln!(f, "erc721_path: {}", self.erc721_path.display())?;
        writeln!(f, "erc1155_path: {}", self.erc1155_path.display())?;
        Ok(())
    }
}

fn felt_from_hex(s: &str) -> Result<Felt, String> {
    Felt::from_hex(s).map_err(|err| format!("invalid field element {s:?}: {err}"))
}

#[cfg(test)]
mod test {
    use super::*;

    fn arguments() -> Arguments {
        Arguments::parse_from([
            "deployer",
            "--account-address",
            "0x127fd5f1fe78a71f8bcd1fec63e3fe2f0486b6ecd5c86a0466c3a21fa5cfcec",
            "--account-private-key",
            "0xc5b2fcab997346f3ea1c00b002ecf6f382c5f9c9659a3894eb783c5320f912",
            "--owner-address",
            "0x1",
            "--bundler-path",
            "target/dev/bundler.contract_class.json",
            "--erc20-path",
            "target/dev/erc20.contract_class.json",
            "--erc721-path",
            "target/dev/erc721.contract_class.json",
            "--erc1155-path",
            "target/dev/erc1155.contract_class.json",
        ])
    }

    #[test]
    fn network_defaults_to_devnet() {
        assert_eq!(arguments().network, Network::Devnet);
    }

    #[test]
    fn display_does_not_reveal_private_key() {
        let formatted = arguments().to_string();
        assert!(formatted.contains("account_private_key: SECRET"));
        assert!(!formatted.contains("c5b2fcab"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        let result = Arguments::try_parse_from([
            "deployer",
            "--account-address",
            "not-a-felt",
            "--account-private-key",
            "0x1",
            "--owner-address",
            "0x1",
            "--bundler-path",
            "a",
            "--erc20-path",
            "b",
            "--erc721-path",
            "c",
            "--erc1155-path",
            "d",
        ]);
        assert!(result.is_err());
    }
}
