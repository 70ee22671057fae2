use std::str::FromStr;

use crate::ParseStatusError;
use alloy_primitives::{Address, Bytes, B256, U256};

/// The logical source queue a rollup transaction was extracted from.
///
/// The origin gates the forwarding policy: each queue type is drained independently and at its
/// own cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueOrigin {
    /// The transaction was submitted by the sequencer.
    Sequencer,
    /// The transaction was submitted through the safety queue.
    SafetyQueue,
    /// The transaction is an L1 to L2 deposit.
    L1ToL2Queue,
}

impl QueueOrigin {
    /// Returns the string representation persisted in the store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequencer => "SEQUENCER",
            Self::SafetyQueue => "SAFETY_QUEUE",
            Self::L1ToL2Queue => "L1_TO_L2_QUEUE",
        }
    }
}

impl FromStr for QueueOrigin {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEQUENCER" => Ok(Self::Sequencer),
            "SAFETY_QUEUE" => Ok(Self::SafetyQueue),
            "L1_TO_L2_QUEUE" => Ok(Self::L1ToL2Queue),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// A rollup transaction decoded from the logs of an L1 transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupTransaction {
    /// The hash of the L1 transaction the rollup transaction was decoded from.
    pub l1_tx_hash: B256,
    /// The index of the owning L1 transaction within its block.
    pub l1_tx_index: u32,
    /// The index of the log the rollup transaction was decoded from.
    pub l1_tx_log_index: u32,
    /// The number of the L1 block the owning transaction belongs to.
    pub l1_block_number: u64,
    /// The timestamp of the L1 block the owning transaction belongs to.
    pub l1_timestamp: u64,
    /// The queue the rollup transaction originates from.
    pub queue_origin: QueueOrigin,
    /// The ordering key of the transaction within its geth submission.
    pub index_within_submission: u32,
    /// The transaction target, [`None`] for contract creations.
    pub target: Option<Address>,
    /// The transaction calldata.
    pub calldata: Bytes,
    /// The transaction sender, if recoverable.
    pub sender: Option<Address>,
    /// The L1 message sender for L1 to L2 transactions.
    pub l1_message_sender: Option<Address>,
    /// The transaction gas limit, if present.
    pub gas_limit: Option<U256>,
    /// The sender nonce, if present.
    pub nonce: Option<u64>,
    /// The raw transaction signature, if present.
    pub signature: Option<Bytes>,
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for RollupTransaction {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            l1_tx_hash: u.arbitrary()?,
            l1_tx_index: u.arbitrary::<u16>()? as u32,
            l1_tx_log_index: u.arbitrary::<u16>()? as u32,
            l1_block_number: u.arbitrary::<u32>()? as u64,
            l1_timestamp: u.arbitrary::<u32>()? as u64,
            queue_origin: *u.choose(&[
                QueueOrigin::Sequencer,
                QueueOrigin::SafetyQueue,
                QueueOrigin::L1ToL2Queue,
            ])?,
            index_within_submission: u.arbitrary::<u16>()? as u32,
            target: u.arbitrary()?,
            calldata: u.arbitrary()?,
            sender: u.arbitrary()?,
            l1_message_sender: u.arbitrary()?,
            gas_limit: u.arbitrary()?,
            nonce: u.arbitrary::<Option<u32>>()?.map(|n| n as u64),
            signature: u.arbitrary()?,
        })
    }
}
