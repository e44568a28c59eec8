use cyoa_core::api::{hashscan_url, CliError, EntityId, ExplorerKind};

use super::cli::AddressArgs;

pub fn run_address(args: &AddressArgs) -> Result<String, CliError> {
    let input = args.id.trim();
    let id = if input.starts_with("0x") || input.starts_with("0X") {
        EntityId::from_evm_address(input)?
    } else {
        input.parse::<EntityId>()?
    };
    let evm = id.to_evm_address();

    Ok(format!(
        "entity_id: {id}\nevm_address: {evm}\nhashscan: {}",
        hashscan_url(&args.network, ExplorerKind::Address, &evm)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_both_directions() {
        let out = run_address(&AddressArgs {
            id: "0.0.5005".to_string(),
            network: "testnet".to_string(),
        })
        .unwrap();
        assert!(out.contains("evm_address: 0x000000000000000000000000000000000000138d"));

        let back = run_address(&AddressArgs {
            id: "0x000000000000000000000000000000000000138d".to_string(),
            network: "testnet".to_string(),
        })
        .unwrap();
        assert!(back.starts_with("entity_id: 0.0.5005"));
    }
}
