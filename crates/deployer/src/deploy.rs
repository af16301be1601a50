use {
    crate::{account::DeployerAccount, artifact, calldata},
    anyhow::{Context, Result, anyhow, bail},
    starknet::{
        accounts::{Account, ConnectedAccount},
        contract::ContractFactory,
        core::types::{BlockId, BlockTag, ExecutionResult, Felt, StarknetError},
        providers::{Provider, ProviderError},
        signers::SigningKey,
    },
    std::{path::Path, time::Duration},
};

/// How long and how often to poll for a submitted transaction's receipt
/// before giving up on it.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const RECEIPT_POLL_ATTEMPTS: usize = 150;

/// The result of declaring a contract class. The transaction hash is absent
/// if the class was already declared on the network.
#[derive(Debug, PartialEq, Eq)]
pub struct DeclaredClass {
    pub class_hash: Felt,
    pub transaction_hash: Option<Felt>,
}

impl DeclaredClass {
    /// A class the network already knows. There is no transaction to wait
    /// for.
    fn known(class_hash: Felt) -> Self {
        Self {
            class_hash,
            transaction_hash: None,
        }
    }

    /// A class declared by a freshly submitted transaction, which still needs
    /// confirmation.
    fn submitted(class_hash: Felt, transaction_hash: Felt) -> Self {
        Self {
            class_hash,
            transaction_hash: Some(transaction_hash),
        }
    }
}

/// Interprets a `get_class` probe for a class hash: any answer means the
/// class is already declared, `ClassHashNotFound` means it is not, and every
/// other failure propagates unchanged.
fn class_is_declared<T>(probe: Result<T, ProviderError>) -> Result<bool, ProviderError> {
    match probe {
        Ok(_) => Ok(true),
        Err(ProviderError::StarknetError(StarknetError::ClassHashNotFound)) => Ok(false),
        Err(err) => Err(err),
    }
}

/// The result of deploying a contract instance.
pub struct DeployedContract {
    pub address: Felt,
    pub transaction_hash: Felt,
}

/// Declares and deploys the fixed contract set with a single account. The
/// deployments are independent of one another; a failure in any of them
/// aborts the run.
pub struct Deployer {
    account: DeployerAccount,
    owner: Felt,
}

impl Deployer {
    pub fn new(account: DeployerAccount, owner: Felt) -> Self {
        Self { account, owner }
    }

    pub async fn deploy_bundler(&self, path: &Path) -> Result<DeployedContract> {
        let declared = self.declare(path, "TokenBundler").await?;
        tracing::info!("deploying bundler, owner {:#x}", self.owner);
        self.deploy(declared.class_hash, calldata::bundler_constructor(self.owner))
            .await
    }

    pub async fn deploy_mock_erc20(&self, path: &Path) -> Result<DeployedContract> {
        let declared = self.declare(path, "MockERC20").await?;
        tracing::info!("deploying mock ERC20, recipient {:#x}", self.owner);
        self.deploy(declared.class_hash, calldata::erc20_constructor(self.owner))
            .await
    }

    pub async fn deploy_mock_erc721(&self, path: &Path) -> Result<DeployedContract> {
        let declared = self.declare(path, "MockERC721").await?;
        tracing::info!("deploying mock ERC721, owner {:#x}", self.owner);
        self.deploy(declared.class_hash, calldata::erc721_constructor(self.owner))
            .await
    }

    pub async fn deploy_mock_erc1155(&self, path: &Path) -> Result<DeployedContract> {
        let declared = self.declare(path, "MockERC1155").await?;
        tracing::info!("deploying mock ERC1155, recipient {:#x}", self.owner);
        self.deploy(
            declared.class_hash,
            calldata::erc1155_constructor(self.owner),
        )
        .await
    }

    /// Declares the contract class at `path` unless the network already knows
    /// it. Blocks until the declare transaction is confirmed.
    async fn declare(&self, path: &Path, contract_name: &str) -> Result<DeclaredClass> {
        tracing::info!("declaring {contract_name}");
        let artifact = artifact::load(path)?;
        tracing::info!("class hash: {:#x}", artifact.class_hash);

        let probe = self
            .account
            .provider()
            .get_class(BlockId::Tag(BlockTag::Latest), artifact.class_hash)
            .await;
        let declared = if class_is_declared(probe)
            .with_context(|| format!("probe declared class of {contract_name}"))?
        {
            tracing::info!("already declared");
            DeclaredClass::known(artifact.class_hash)
        } else {
            let result = self
                .account
                .declare_v3(artifact.flattened.clone(), artifact.compiled_class_hash)
                .send()
                .await
                .with_context(|| format!("declare {contract_name}"))?;
            tracing::info!("declare transaction hash: {:#x}", result.transaction_hash);
            DeclaredClass::submitted(result.class_hash, result.transaction_hash)
        };

        if let Some(transaction_hash) = declared.transaction_hash {
            self.wait_for_transaction(transaction_hash).await?;
        }
        Ok(declared)
    }

    /// Deploys an instance of a declared class through the universal deployer
    /// and blocks until the deploy transaction is confirmed.
    async fn deploy(
        &self,
        class_hash: Felt,
        constructor_calldata: Vec<Felt>,
    ) -> Result<DeployedContract> {
        let salt = SigningKey::from_random().secret_scalar();
        let factory = ContractFactory::new(class_hash, self.account.clone());
        let deployment = factory.deploy_v3(constructor_calldata, salt, true);
        let address = deployment.deployed_address();

        let result = deployment
            .send()
            .await
            .with_context(|| format!("deploy class {class_hash:#x}"))?;
        tracing::info!("deploy transaction hash: {:#x}", result.transaction_hash);
        self.wait_for_transaction(result.transaction_hash).await?;
        tracing::info!("deployed at {address:#x}");

        Ok(DeployedContract {
            address,
            transaction_hash: result.transaction_hash,
        })
    }

    /// Polls the node until the transaction's receipt is available. A receipt
    /// for a reverted transaction is an error, as is exhausting the poll
    /// budget.
    async fn wait_for_transaction(&self, transaction_hash: Felt) -> Result<()> {
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            match self
                .account
                .provider()
                .get_transaction_receipt(transaction_hash)
                .await
            {
                Ok(receipt) => {
                    return match receipt.receipt.execution_result() {
                        ExecutionResult::Succeeded => Ok(()),
                        ExecutionResult::Reverted { reason } => Err(anyhow!(
                            "transaction {transaction_hash:#x} reverted: {reason}"
                        )),
                    };
                }
                Err(ProviderError::StarknetError(StarknetError::TransactionHashNotFound)) => {
                    tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
                }
                Err(err) => {
                    return Err(err).with_context(|| {
                        format!("fetch receipt of transaction {transaction_hash:#x}")
                    });
                }
            }
        }
        bail!(
            "transaction {transaction_hash:#x} was not confirmed after {} attempts",
            RECEIPT_POLL_ATTEMPTS
        )
    }
}
