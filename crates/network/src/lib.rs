use {std::str::FromStr, thiserror::Error};

/// Represents each Starknet network the deployer can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Goerli,
    Sepolia,
    Devnet,
}

impl Network {
    /// Returns the canonical name of the network.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Goerli => "goerli",
            Self::Sepolia => "sepolia",
            Self::Devnet => "devnet",
        }
    }

    /// Returns the JSON-RPC endpoint of the network's node, if one is
    /// configured. Only the local devnet ships with a default endpoint.
    pub fn rpc_url(&self) -> Option<&'static str> {
        match self {
            Self::Devnet => Some("http://localhost:5050/rpc"),
            Self::Mainnet | Self::Goerli | Self::Sepolia => None,
        }
    }

    /// Returns the block explorer URL of the network, if it has one.
    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            Self::Goerli => Some("https://goerli.voyager.online"),
            Self::Sepolia => Some("https://sepolia.voyager.online"),
            Self::Mainnet | Self::Devnet => None,
        }
    }

    /// Returns the sequencer gateway URL of the network, if it has one.
    pub fn gateway_url(&self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some("https://alpha-mainnet.starknet.io/gateway"),
            Self::Goerli => Some("https://alpha4.starknet.io/gateway"),
            Self::Sepolia => Some("https://alpha-sepolia.starknet.io/gateway"),
            Self::Devnet => None,
        }
    }

    /// Returns the feeder gateway URL of the network, if it has one.
    pub fn feeder_gateway_url(&self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some("https://alpha-mainnet.starknet.io/feeder_gateway"),
            Self::Goerli => Some("https://alpha4.starknet.io/feeder_gateway"),
            Self::Sepolia => Some("https://alpha-sepolia.starknet.io/feeder_gateway"),
            Self::Devnet => None,
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    /// Resolves a network by name, case-insensitively. Returns an error for
    /// any name without a descriptor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "goerli" => Ok(Self::Goerli),
            "sepolia" => Ok(Self::Sepolia),
            "devnet" => Ok(Self::Devnet),
            _ => Err(Error::NetworkNotFound(s.to_string())),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("network {0} not found")]
    NetworkNotFound(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolves_all_supported_names() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("goerli".parse::<Network>().unwrap(), Network::Goerli);
        assert_eq!("sepolia".parse::<Network>().unwrap(), Network::Sepolia);
        assert_eq!("devnet".parse::<Network>().unwrap(), Network::Devnet);
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!("MAINNET".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("Sepolia".parse::<Network>().unwrap(), Network::Sepolia);
        assert_eq!("DevNet".parse::<Network>().unwrap(), Network::Devnet);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "holesky".parse::<Network>().unwrap_err();
        assert_eq!(err.to_string(), "network holesky not found");
    }

    #[test]
    fn devnet_descriptor() {
        assert_eq!(Network::Devnet.rpc_url(), Some("http://localhost:5050/rpc"));
        assert_eq!(Network::Devnet.explorer_url(), None);
        assert_eq!(Network::Devnet.gateway_url(), None);
        assert_eq!(Network::Devnet.feeder_gateway_url(), None);
    }

    #[test]
    fn mainnet_has_gateways_but_no_rpc_url() {
        assert_eq!(Network::Mainnet.rpc_url(), None);
        assert_eq!(
            Network::Mainnet.gateway_url(),
            Some("https://alpha-mainnet.starknet.io/gateway")
        );
        assert_eq!(
            Network::Mainnet.feeder_gateway_url(),
            Some("https://alpha-mainnet.starknet.io/feeder_gateway")
        );
    }
}
