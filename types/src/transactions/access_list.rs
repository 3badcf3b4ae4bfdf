use crate::{Address, H256};

/// EIP-2930 list of addresses and storage keys the transaction plans to access.
#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AccessListItem> {
        self.0.iter()
    }
}

impl From<Vec<AccessListItem>> for AccessList {
    fn from(src: Vec<AccessListItem>) -> Self {
        Self(src)
    }
}

impl From<Vec<(Address, Vec<H256>)>> for AccessList {
    fn from(src: Vec<(Address, Vec<H256>)>) -> Self {
        Self(
            src.into_iter()
                .map(|(address, storage_keys)| AccessListItem { address, storage_keys })
                .collect(),
        )
    }
}

impl IntoIterator for AccessList {
    type Item = AccessListItem;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Debug, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    pub address: Address,
    pub storage_keys: Vec<H256>,
}
