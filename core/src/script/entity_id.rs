use std::fmt;
use std::str::FromStr;

use crate::error::EntityIdError;

/// Ledger entity id in `shard.realm.num` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    pub shard: u32,
    pub realm: u64,
    pub num: u64,
}

impl EntityId {
    pub fn new(shard: u32, realm: u64, num: u64) -> Self {
        Self { shard, realm, num }
    }

    /// Long-zero EVM address: 4 bytes shard, 8 bytes realm, 8 bytes num, big-endian.
    pub fn to_evm_address(&self) -> String {
        format!("0x{:08x}{:016x}{:016x}", self.shard, self.realm, self.num)
    }

    pub fn from_evm_address(address: &str) -> Result<Self, EntityIdError> {
        let hex = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
            .unwrap_or(address);
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(EntityIdError::Address(address.to_string()));
        }
        let parse = |s: &str| u64::from_str_radix(s, 16);
        let bad = |_| EntityIdError::Address(address.to_string());
        let shard = u32::from_str_radix(&hex[..8], 16).map_err(bad)?;
        let realm = parse(&hex[8..24]).map_err(bad)?;
        let num = parse(&hex[24..]).map_err(bad)?;

        // An aliased ECDSA account address is not derived from an entity id.
        if realm >> 32 != 0 || num >> 32 != 0 {
            return Err(EntityIdError::NotLongZero(address.to_string()));
        }
        Ok(Self { shard, realm, num })
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.shard, self.realm, self.num)
    }
}

impl FromStr for EntityId {
    type Err = EntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        let [shard, realm, num] = parts.as_slice() else {
            return Err(EntityIdError::Format(s.to_string()));
        };
        let component = |c: &str| EntityIdError::Component {
            input: s.to_string(),
            component: c.to_string(),
        };
        Ok(Self {
            shard: shard.parse().map_err(|_| component(shard))?,
            realm: realm.parse().map_err(|_| component(realm))?,
            num: num.parse().map_err(|_| component(num))?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerKind {
    Token,
    Transaction,
    Account,
    Contract,
    Address,
}

impl ExplorerKind {
    fn path(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Transaction => "transaction",
            Self::Account => "account",
            Self::Contract => "contract",
            Self::Address => "address",
        }
    }
}

pub fn hashscan_url(network: &str, kind: ExplorerKind, id: &str) -> String {
    format!("https://hashscan.io/{}/{}/{}", network, kind.path(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_maps_to_long_zero_address() {
        let id: EntityId = "0.0.4686041".parse().unwrap();
        assert_eq!(
            id.to_evm_address(),
            "0x00000000000000000000000000000000004780d9"
        );
        assert_eq!(EntityId::from_evm_address(&id.to_evm_address()), Ok(id));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(
            "0.0".parse::<EntityId>(),
            Err(EntityIdError::Format(_))
        ));
        assert!(matches!(
            "0.x.5".parse::<EntityId>(),
            Err(EntityIdError::Component { .. })
        ));
    }

    #[test]
    fn alias_addresses_are_not_entity_ids() {
        let err =
            EntityId::from_evm_address("0x7394111093687e9710b7a7aeba3ba0f417c54474").unwrap_err();
        assert!(matches!(err, EntityIdError::NotLongZero(_)));
        assert!(matches!(
            EntityId::from_evm_address("0x1234"),
            Err(EntityIdError::Address(_))
        ));
    }

    #[test]
    fn builds_explorer_urls() {
        assert_eq!(
            hashscan_url("testnet", ExplorerKind::Token, "0.0.5"),
            "https://hashscan.io/testnet/token/0.0.5"
        );
    }
}
