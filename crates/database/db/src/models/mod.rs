/// This module contains the L1 block database model.
pub mod l1_block;

/// This module contains the L1 transaction database model.
pub mod l1_tx;

/// This module contains the L1 rollup transaction database model.
pub mod l1_rollup_tx;

/// This module contains the geth submission queue database model.
pub mod geth_submission_queue;

/// This module contains the L2 transaction output database model.
pub mod l2_tx_output;

/// This module contains the canonical chain batch database model.
pub mod canonical_chain_batch;

/// This module contains the state commitment chain batch database model.
pub mod state_commitment_chain_batch;

/// This module contains the L1 rollup state root database model.
pub mod l1_rollup_state_root;

/// This module contains the L1 rollup state root batch database model.
pub mod l1_rollup_state_root_batch;
