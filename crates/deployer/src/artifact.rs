use {
    anyhow::{Context, Result},
    starknet::core::types::{
        Felt,
        FlattenedSierraClass,
        contract::{CompiledClass, SierraClass},
    },
    std::{
        path::{Path, PathBuf},
        sync::Arc,
    },
};

/// A compiled contract class together with the hashes derived from it and its
/// casm counterpart.
#[derive(Debug)]
pub struct ContractArtifact {
    pub class_hash: Felt,
    pub compiled_class_hash: Felt,
    pub flattened: Arc<FlattenedSierraClass>,
}

/// Derives the path of the casm artifact belonging to a contract class by the
/// fixed filename substitution the build tooling uses.
pub fn casm_path(path: &Path) -> PathBuf {
    PathBuf::from(
        path.to_string_lossy()
            .replace(".contract_class.json", ".compiled_contract_class.json"),
    )
}

/// Reads and parses a contract class and its casm counterpart from disk.
pub fn load(path: &Path) -> Result<ContractArtifact> {
    let sierra = std::fs::read(path)
        .with_context(|| format!("read contract class at {}", path.display()))?;
    let sierra: SierraClass = serde_json::from_slice(&sierra)
        .with_context(|| format!("parse contract class at {}", path.display()))?;

    let casm = casm_path(path);
    let compiled = std::fs::read(&casm)
        .with_context(|| format!("read compiled contract class at {}", casm.display()))?;
    let compiled: CompiledClass = serde_json::from_slice(&compiled)
        .with_context(|| format!("parse compiled contract class at {}", casm.display()))?;

    let class_hash = sierra.class_hash().context("compute class hash")?;
    let compiled_class_hash = compiled
        .class_hash()
        .context("compute compiled class hash")?;

    Ok(ContractArtifact {
        class_hash,
        compiled_class_hash,
        flattened: Arc::new(sierra.flatten().context("flatten contract class")?),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn derives_casm_counterpart_path() {
        assert_eq!(
            casm_path(Path::new("target/dev/pwn_TokenBundler.contract_class.json")),
            PathBuf::from("target/dev/pwn_TokenBundler.compiled_contract_class.json"),
        );
    }

    #[test]
    fn leaves_other_paths_untouched() {
        assert_eq!(
            casm_path(Path::new("target/dev/some_other_file.json")),
            PathBuf::from("target/dev/some_other_file.json"),
        );
    }

    #[test]
    fn missing_artifact_reports_the_path() {
        let err = load(Path::new("/nonexistent/token.contract_class.json")).unwrap_err();
        assert!(
            err.to_string()
                .contains("/nonexistent/token.contract_class.json")
        );
    }

    #[test]
    fn malformed_artifact_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.contract_class.json");
        std::fs::write(&path, b"not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("parse contract class"));
        assert!(err.to_string().contains(path.to_str().unwrap()));
    }
}
