use alloy_primitives::{Address, Bytes, B256, U256};

/// An L1 block of record, as decoded by the upstream chain client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1BlockRecord {
    /// The block hash.
    pub hash: B256,
    /// The hash of the parent block.
    pub parent_hash: B256,
    /// The block number.
    pub number: u64,
    /// The block timestamp.
    pub timestamp: u64,
    /// The block nonce.
    pub nonce: u64,
    /// The block difficulty.
    pub difficulty: U256,
    /// The block gas limit.
    pub gas_limit: U256,
    /// The gas used by the block.
    pub gas_used: U256,
    /// The address of the block miner.
    pub miner: Address,
    /// The extra data attached to the block.
    pub extra_data: Bytes,
}

/// An L1 transaction belonging to an ingested [`L1BlockRecord`].
///
/// The index of the transaction within its block is derived from its position in the insert
/// call and is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1TransactionRecord {
    /// The transaction hash.
    pub hash: B256,
    /// The hash of the block the transaction belongs to.
    pub block_hash: B256,
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
    /// The transaction signature.
    pub signature: EcdsaSignature,
}

/// An ECDSA signature in its (r, s, v) encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// The r component of the signature.
    pub r: U256,
    /// The s component of the signature.
    pub s: U256,
    /// The recovery id of the signature.
    pub v: u64,
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for L1BlockRecord {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            hash: u.arbitrary()?,
            parent_hash: u.arbitrary()?,
            number: u.arbitrary::<u32>()? as u64,
            timestamp: u.arbitrary::<u32>()? as u64,
            nonce: u.arbitrary::<u32>()? as u64,
            difficulty: u.arbitrary()?,
            gas_limit: u.arbitrary()?,
            gas_used: u.arbitrary()?,
            miner: u.arbitrary()?,
            extra_data: u.arbitrary()?,
        })
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for L1TransactionRecord {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(Self {
            hash: u.arbitrary()?,
            block_hash: u.arbitrary()?,
            sender: u.arbitrary()?,
            target: u.arbitrary()?,
            nonce: u.arbitrary::<u32>()? as u64,
            gas_limit: u.arbitrary()?,
            gas_price: u.arbitrary()?,
            calldata: u.arbitrary()?,
            signature: EcdsaSignature {
                r: u.arbitrary()?,
                s: u.arbitrary()?,
                v: u.arbitrary::<u8>()? as u64,
            },
        })
    }
}
