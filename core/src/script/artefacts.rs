use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArtefactsError;

pub const DEFAULT_ARTEFACTS_FILE: &str = "artefacts.json";

/// Hand-off written by the native token script and read by the interop scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenArtefacts {
    pub token_create_tx_id: String,
    pub token_id: String,
    pub token_evm_address: String,
}

fn io_err(path: &Path, source: std::io::Error) -> ArtefactsError {
    ArtefactsError::Io {
        path: path.display().to_string(),
        source,
    }
}

pub fn write_artefacts(
    path: impl AsRef<Path>,
    artefacts: &TokenArtefacts,
) -> Result<(), ArtefactsError> {
    let path = path.as_ref();
    let json = serde_json::to_string(artefacts).map_err(|source| ArtefactsError::Json {
        context: "serialize artefacts",
        source,
    })?;
    std::fs::write(path, json).map_err(|e| io_err(path, e))
}

pub fn read_artefacts(path: impl AsRef<Path>) -> Result<TokenArtefacts, ArtefactsError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_json::from_str(&json).map_err(|source| ArtefactsError::Json {
        context: "deserialize artefacts",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_camel_case_file_the_scripts_share() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_ARTEFACTS_FILE);
        std::fs::write(
            &path,
            r#"{"tokenCreateTxId":"0.0.1001@1700000000.000000001","tokenId":"0.0.5005","tokenEvmAddress":"0x000000000000000000000000000000000000138d"}"#,
        )
        .unwrap();

        let artefacts = read_artefacts(&path).unwrap();
        assert_eq!(artefacts.token_id, "0.0.5005");

        write_artefacts(&path, &artefacts).unwrap();
        assert_eq!(read_artefacts(&path).unwrap(), artefacts);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_artefacts("definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
