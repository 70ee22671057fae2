use alloy_primitives::{Address, Bytes, B256, U256};

/// A transaction output produced by the L2 execution engine.
///
/// Outputs are inserted idempotently, keyed by transaction hash: re-inserting an output with
/// the same identity is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2TransactionOutput {
    /// The L2 transaction hash.
    pub tx_hash: B256,
    /// The state root after executing the transaction.
    pub state_root: B256,
    /// The L2 block number the transaction was executed in.
    pub block_number: u64,
    /// The timestamp of the L2 block.
    pub block_timestamp: u64,
    /// The index of the transaction within its L2 block.
    pub tx_index: u32,
    /// The transaction sender.
    pub sender: Address,
    /// The transaction target, [`None`] for contract creations.
    pub target: Option<Address>,
    /// The sender nonce.
    pub nonce: u64,
    /// The transaction gas limit.
    pub gas_limit: U256,
    /// The transaction gas price.
    pub gas_price: U256,
    /// The transaction calldata.
    pub calldata: Bytes,
    /// The raw transaction signature.
    pub signature: Bytes,
    /// The id of the originating rollup transaction, when the transaction entered L2 through
    /// the L1 queues.
    pub l1_rollup_tx_id: Option<i64>,
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for L2TransactionOutput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            tx_hash: u.arbitrary()?,
            state_root: u.arbitrary()?,
            block_number: u.arbitrary::<u32>()? as u64,
            block_timestamp: u.arbitrary::<u32>()? as u64,
            tx_index: u.arbitrary::<u16>()? as u32,
            sender: u.arbitrary()?,
            target: u.arbitrary()?,
            nonce: u.arbitrary::<u32>()? as u64,
            gas_limit: u.arbitrary()?,
            gas_price: u.arbitrary()?,
            calldata: u.arbitrary()?,
            signature: u.arbitrary()?,
            l1_rollup_tx_id: None,
        })
    }
}
