use crate::serde_utils::uint_to_hex;
use serde::{Deserialize, Serialize};

/// Result of `eth_syncing`: `false` on the wire when the node is in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncStatus {
    NotSyncing,
    Syncing(SyncProgress),
}

impl SyncStatus {
    #[must_use]
    pub const fn is_syncing(&self) -> bool {
        matches!(self, Self::Syncing(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    /// Block at which the import started
    #[serde(with = "uint_to_hex")]
    pub starting_block: u64,
    /// Current block
    #[serde(with = "uint_to_hex")]
    pub current_block: u64,
    /// Estimated highest block
    #[serde(with = "uint_to_hex")]
    pub highest_block: u64,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SyncStatusRepr {
    Syncing(SyncProgress),
    NotSyncing(bool),
}

impl Serialize for SyncStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let repr = match *self {
            Self::NotSyncing => SyncStatusRepr::NotSyncing(false),
            Self::Syncing(progress) => SyncStatusRepr::Syncing(progress),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SyncStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match SyncStatusRepr::deserialize(deserializer)? {
            SyncStatusRepr::Syncing(progress) => Ok(Self::Syncing(progress)),
            SyncStatusRepr::NotSyncing(false) => Ok(Self::NotSyncing),
            SyncStatusRepr::NotSyncing(true) => {
                Err(serde::de::Error::custom("eth_syncing returned `true` without progress"))
            },
        }
    }
}
