use cyoa_core::api::{hashscan_url, read_artefacts, CliError, ExplorerKind};

use super::cli::ArtefactsCommand;

pub fn run_artefacts(cmd: &ArtefactsCommand) -> Result<String, CliError> {
    match cmd {
        ArtefactsCommand::Show { file, network } => {
            let artefacts = read_artefacts(file)?;
            let json = serde_json::to_string_pretty(&artefacts)
                .map_err(|e| CliError::Command(e.to_string()))?;
            Ok(format!(
                "{json}\ntoken: {}\ntransaction: {}",
                hashscan_url(network, ExplorerKind::Token, &artefacts.token_id),
                hashscan_url(
                    network,
                    ExplorerKind::Transaction,
                    &artefacts.token_create_tx_id
                ),
            ))
        }
    }
}
