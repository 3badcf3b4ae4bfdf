use ethrpc_types::{Address, AtBlock, BlockIdentifier, Log, H256};
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents the target range of blocks for the filter
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterBlockOption {
    Range { from_block: Option<AtBlock>, to_block: Option<AtBlock> },
    AtBlockHash(H256),
}

impl Default for FilterBlockOption {
    fn default() -> Self {
        Self::Range { from_block: None, to_block: None }
    }
}

impl From<H256> for FilterBlockOption {
    fn from(hash: H256) -> Self {
        Self::AtBlockHash(hash)
    }
}

impl From<u64> for FilterBlockOption {
    fn from(block_number: u64) -> Self {
        Self::Range {
            from_block: Some(AtBlock::At(BlockIdentifier::Number(block_number))),
            to_block: Some(AtBlock::At(BlockIdentifier::Number(block_number))),
        }
    }
}

impl From<AtBlock> for FilterBlockOption {
    fn from(at: AtBlock) -> Self {
        match at {
            AtBlock::At(BlockIdentifier::Hash(hash)) => Self::AtBlockHash(hash),
            _ => Self::Range { from_block: Some(at), to_block: Some(at) },
        }
    }
}

impl From<BlockIdentifier> for FilterBlockOption {
    fn from(identifier: BlockIdentifier) -> Self {
        Self::from(AtBlock::At(identifier))
    }
}

impl FilterBlockOption {
    /// Whether a log emitted in `block_number`/`block_hash` falls inside this range.
    /// `earliest` is block 0, the other symbolic bounds (`latest`, `pending`...) can't be
    /// resolved locally and are open.
    fn contains(&self, block_number: Option<u64>, block_hash: Option<H256>) -> bool {
        match self {
            Self::AtBlockHash(hash) => block_hash == Some(*hash),
            Self::Range { from_block, to_block } => {
                let from = from_block.as_ref().and_then(local_block_number);
                let to = to_block.as_ref().and_then(local_block_number);
                if from.is_none() && to.is_none() {
                    return true;
                }
                let Some(number) = block_number else {
                    // pending log without a block number
                    return false;
                };
                from.map_or(true, |from| number >= from) && to.map_or(true, |to| number <= to)
            },
        }
    }
}

fn local_block_number(at: &AtBlock) -> Option<u64> {
    match at {
        AtBlock::Earliest => Some(0),
        at => at.as_number(),
    }
}

/// One topic position of a filter, any of the listed topics matches. An empty topic
/// matches anything and is sent as `null`, a single topic is sent as a scalar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Topic(pub Vec<H256>);

impl Serialize for Topic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0.as_slice() {
            [] => serializer.serialize_none(),
            [topic] => topic.serialize(serializer),
            topics => topics.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Topic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // the array variant must be tried first
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TopicRepr {
            Many(Vec<H256>),
            One(H256),
        }
        let topics = match <Option<TopicRepr> as Deserialize<'de>>::deserialize(deserializer)? {
            Some(TopicRepr::Many(topics)) => topics,
            Some(TopicRepr::One(topic)) => vec![topic],
            None => Vec::new(),
        };
        Ok(Self(topics))
    }
}

impl Topic {
    /// Matches any topic.
    #[must_use]
    pub const fn any() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn matches(&self, topic: &H256) -> bool {
        self.is_wildcard() || self.0.contains(topic)
    }
}

impl From<H256> for Topic {
    fn from(topic: H256) -> Self {
        Self(vec![topic])
    }
}

impl From<Option<H256>> for Topic {
    fn from(topic: Option<H256>) -> Self {
        Self(topic.into_iter().collect())
    }
}

impl From<Vec<H256>> for Topic {
    fn from(topics: Vec<H256>) -> Self {
        Self(topics)
    }
}

/// Log filter of `eth_getLogs`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Filter {
    /// Blocks to search, a range or a single block hash.
    pub block_option: FilterBlockOption,

    /// A list of addresses from which logs should originate, empty matches any address.
    pub address: Vec<Address>,

    /// Array of topics. topics are order-dependent.
    pub topics: Vec<Topic>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive block range.
    #[must_use]
    pub fn select(mut self, from_block: impl Into<AtBlock>, to_block: impl Into<AtBlock>) -> Self {
        self.block_option = FilterBlockOption::Range {
            from_block: Some(from_block.into()),
            to_block: Some(to_block.into()),
        };
        self
    }

    #[must_use]
    pub fn from_block(mut self, block: impl Into<AtBlock>) -> Self {
        let to_block = match self.block_option {
            FilterBlockOption::Range { to_block, .. } => to_block,
            FilterBlockOption::AtBlockHash(_) => None,
        };
        self.block_option = FilterBlockOption::Range { from_block: Some(block.into()), to_block };
        self
    }

    #[must_use]
    pub fn to_block(mut self, block: impl Into<AtBlock>) -> Self {
        let from_block = match self.block_option {
            FilterBlockOption::Range { from_block, .. } => from_block,
            FilterBlockOption::AtBlockHash(_) => None,
        };
        self.block_option = FilterBlockOption::Range { from_block, to_block: Some(block.into()) };
        self
    }

    #[must_use]
    pub fn at_block_hash(mut self, hash: H256) -> Self {
        self.block_option = FilterBlockOption::AtBlockHash(hash);
        self
    }

    /// Adds an address to the set of accepted log emitters.
    #[must_use]
    pub fn address(mut self, address: Address) -> Self {
        self.address.push(address);
        self
    }

    /// Sets the topic at `position`, filling the positions before it with wildcards.
    #[must_use]
    pub fn topic(mut self, position: usize, topic: impl Into<Topic>) -> Self {
        if self.topics.len() <= position {
            self.topics.resize(position + 1, Topic::any());
        }
        self.topics[position] = topic.into();
        self
    }

    /// Shorthand for `topic(0, ..)`, the event signature.
    #[must_use]
    pub fn event(self, signature: H256) -> Self {
        self.topic(0, signature)
    }

    /// Returns `true` if a node evaluating this filter would return `log`.
    #[must_use]
    pub fn matches(&self, log: &Log) -> bool {
        if !self.block_option.contains(log.block_number, log.block_hash) {
            return false;
        }
        if !self.address.is_empty() && !self.address.contains(&log.address) {
            return false;
        }
        if self.topics.len() > log.topics.len() {
            return false;
        }
        self.topics.iter().zip(log.topics.iter()).all(|(filter, topic)| filter.matches(topic))
    }
}

impl Serialize for Filter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Filter", 5)?;
        match self.block_option {
            FilterBlockOption::Range { from_block, to_block } => {
                if let Some(ref from_block) = from_block {
                    s.serialize_field("fromBlock", from_block)?;
                }

                if let Some(ref to_block) = to_block {
                    s.serialize_field("toBlock", to_block)?;
                }
            },
            FilterBlockOption::AtBlockHash(ref h) => s.serialize_field("blockHash", h)?,
        }

        match self.address.as_slice() {
            [] => {},
            [address] => s.serialize_field("address", address)?,
            addresses => s.serialize_field("address", addresses)?,
        }
        if !self.topics.is_empty() {
            s.serialize_field("topics", &self.topics)?;
        }
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethrpc_types::Bytes;
    use ethrpc_types::H160;
    use hex_literal::hex;
    use serde_json::json;

    const ADDRESS_A: Address = H160(hex!("1a94fce7ef36bc90959e206ba569a12afbc91ca1"));
    const ADDRESS_B: Address = H160(hex!("86e4dc95c7fbdbf52e33d563bbdb00823894c287"));
    const TRANSFER: H256 =
        H256(hex!("ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"));
    const APPROVAL: H256 =
        H256(hex!("8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"));
    const SENDER: H256 =
        H256(hex!("000000000000000000000000a7d9ddbe1f17865597fbd27ec712455208b6b76d"));

    fn log(address: Address, topics: &[H256], block_number: u64) -> Log {
        Log {
            address,
            topics: topics.to_vec(),
            data: Bytes::new(),
            block_number: Some(block_number),
            ..Log::default()
        }
    }

    fn fixture() -> Vec<Log> {
        vec![
            log(ADDRESS_A, &[TRANSFER, SENDER], 10),
            log(ADDRESS_A, &[APPROVAL, SENDER], 11),
            log(ADDRESS_B, &[TRANSFER], 12),
            log(ADDRESS_B, &[], 13),
            log(ADDRESS_A, &[TRANSFER, SENDER, SENDER], 14),
        ]
    }

    fn matching_blocks(filter: &Filter) -> Vec<u64> {
        fixture()
            .iter()
            .filter(|log| filter.matches(log))
            .filter_map(|log| log.block_number)
            .collect()
    }

    #[test]
    fn filter_with_one_address_works() {
        let filter = Filter {
            address: vec![ADDRESS_A],
            topics: vec![Topic::from(H256(hex!(
                "241ea03ca20251805084d27d4440371c34a0b85ff108f6bb5611248f73818b80"
            )))],
            block_option: FilterBlockOption::AtBlockHash(H256(hex!(
                "7c5a35e9cb3e8ae0e221ab470abae9d446c3a5626ce6689fc777dcffcab52c70"
            ))),
        };
        let json = json!({
            "address": "0x1a94fce7ef36bc90959e206ba569a12afbc91ca1",
            "topics":["0x241ea03ca20251805084d27d4440371c34a0b85ff108f6bb5611248f73818b80"],
            "blockHash": "0x7c5a35e9cb3e8ae0e221ab470abae9d446c3a5626ce6689fc777dcffcab52c70",
        });

        let encoded = serde_json::to_value(filter).unwrap();
        assert_eq!(json, encoded);
    }

    #[test]
    fn filter_with_many_addresses_works() {
        let filter = Filter::new()
            .select(0x10u64, AtBlock::Latest)
            .address(ADDRESS_A)
            .address(ADDRESS_B)
            .topic(1, vec![SENDER, TRANSFER]);
        let json = json!({
            "fromBlock": "0x10",
            "toBlock": "latest",
            "address": ["0x1a94fce7ef36bc90959e206ba569a12afbc91ca1", "0x86e4dc95c7fbdbf52e33d563bbdb00823894c287"],
            "topics": [
                null,
                [
                    "0x000000000000000000000000a7d9ddbe1f17865597fbd27ec712455208b6b76d",
                    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
                ],
            ],
        });

        let encoded = serde_json::to_value(filter).unwrap();
        assert_eq!(json, encoded);
    }

    #[test]
    fn topic_deserializes_null_scalar_and_array() {
        let topics: Vec<Topic> = serde_json::from_value(json!([
            null,
            "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef",
            ["0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"],
        ]))
        .unwrap();
        assert_eq!(topics, vec![Topic::any(), Topic::from(TRANSFER), Topic::from(TRANSFER)]);
    }

    #[test]
    fn trailing_wildcard_topic_requires_position() {
        // [[A], []] selects logs with topic0 == A and at least two topics
        let filter = Filter { topics: vec![Topic::from(TRANSFER), Topic::any()], ..Filter::new() };
        assert_eq!(matching_blocks(&filter), vec![10, 14]);
    }

    #[test]
    fn empty_address_list_matches_any_emitter() {
        let filter = Filter::new();
        assert_eq!(matching_blocks(&filter), vec![10, 11, 12, 13, 14]);

        let filter = Filter::new().event(TRANSFER);
        assert_eq!(matching_blocks(&filter), vec![10, 12, 14]);

        let filter = Filter::new().address(ADDRESS_B).address(ADDRESS_A).event(TRANSFER);
        assert_eq!(matching_blocks(&filter), vec![10, 12, 14]);

        let filter = Filter::new().address(ADDRESS_B);
        assert_eq!(matching_blocks(&filter), vec![12, 13]);
    }

    #[test]
    fn topic_position_is_an_or_set() {
        let filter = Filter::new().topic(0, vec![TRANSFER, APPROVAL]).topic(1, SENDER);
        assert_eq!(matching_blocks(&filter), vec![10, 11, 14]);

        let filter = Filter::new().topic(2, SENDER);
        assert_eq!(matching_blocks(&filter), vec![14]);
    }

    #[test]
    fn block_range_is_inclusive() {
        let filter = Filter::new().select(11u64, 13u64);
        assert_eq!(matching_blocks(&filter), vec![11, 12, 13]);

        let filter = Filter::new().from_block(13u64).to_block(AtBlock::Latest);
        assert_eq!(matching_blocks(&filter), vec![13, 14]);

        let filter = Filter::new().to_block(10u64);
        assert_eq!(matching_blocks(&filter), vec![10]);
    }

    #[test]
    fn earliest_bound_is_genesis() {
        let filter = Filter::new().to_block(AtBlock::Earliest);
        assert!(matching_blocks(&filter).is_empty());
        assert!(filter.matches(&log(ADDRESS_A, &[TRANSFER], 0)));

        let filter = Filter::new().select(AtBlock::Earliest, 11u64);
        assert_eq!(matching_blocks(&filter), vec![10, 11]);
    }

    #[test]
    fn block_hash_filter_compares_hash() {
        let hash = H256(hex!("7c5a35e9cb3e8ae0e221ab470abae9d446c3a5626ce6689fc777dcffcab52c70"));
        let mut in_block = log(ADDRESS_A, &[TRANSFER], 1);
        in_block.block_hash = Some(hash);
        let other = log(ADDRESS_A, &[TRANSFER], 1);

        let filter = Filter::new().at_block_hash(hash);
        assert!(filter.matches(&in_block));
        assert!(!filter.matches(&other));
        assert_eq!(FilterBlockOption::from(AtBlock::from(hash)), filter.block_option);
    }
}
