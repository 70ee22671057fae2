use std::str::FromStr;

/// Error returned when a status string read from the store does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status string: {0}")]
pub struct ParseStatusError(pub String);

/// The submission lifecycle of a canonical chain or state commitment chain batch.
///
/// A batch only ever advances forward: `QUEUED -> SENT -> FINALIZED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchSubmissionStatus {
    /// The batch has been built and is waiting to be submitted to L1.
    Queued,
    /// The batch has been submitted to L1 but not yet finalized.
    Sent,
    /// The batch is final on L1.
    Finalized,
}

impl BatchSubmissionStatus {
    /// Returns the string representation persisted in the store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Sent => "SENT",
            Self::Finalized => "FINALIZED",
        }
    }

    /// Returns the next status in the submission lifecycle, or [`None`] for a final batch.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Queued => Some(Self::Sent),
            Self::Sent => Some(Self::Finalized),
            Self::Finalized => None,
        }
    }
}

impl FromStr for BatchSubmissionStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(Self::Queued),
            "SENT" => Ok(Self::Sent),
            "FINALIZED" => Ok(Self::Finalized),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// The lifecycle of a geth submission queue entry.
///
/// Entries advance `QUEUED -> SENT` and never regress. The implicit "unqueued" state is
/// represented by the absence of a queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GethSubmissionQueueStatus {
    /// The entry is waiting to be forwarded to the L2 execution engine.
    Queued,
    /// The entry has been forwarded to the L2 execution engine.
    Sent,
}

impl GethSubmissionQueueStatus {
    /// Returns the string representation persisted in the store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Sent => "SENT",
        }
    }

    /// Returns the next status in the queue lifecycle, or [`None`] for a sent entry.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Queued => Some(Self::Sent),
            Self::Sent => None,
        }
    }
}

impl FromStr for GethSubmissionQueueStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "QUEUED" => Ok(Self::Queued),
            "SENT" => Ok(Self::Sent),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// The verification status of an L1 rollup state root batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    /// The batch has not been checked against the L2 computed roots yet.
    Unverified,
    /// The batch matches the L2 computed roots.
    Verified,
    /// The batch was proven fraudulent.
    Fraudulent,
    /// The batch was removed from L1.
    Removed,
}

impl VerificationStatus {
    /// Returns the string representation persisted in the store.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unverified => "UNVERIFIED",
            Self::Verified => "VERIFIED",
            Self::Fraudulent => "FRAUDULENT",
            Self::Removed => "REMOVED",
        }
    }

    /// Returns whether the status is terminal. A `FRAUDULENT` or `REMOVED` batch can never
    /// transition to `VERIFIED`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Fraudulent | Self::Removed)
    }
}

impl FromStr for VerificationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNVERIFIED" => Ok(Self::Unverified),
            "VERIFIED" => Ok(Self::Verified),
            "FRAUDULENT" => Ok(Self::Fraudulent),
            "REMOVED" => Ok(Self::Removed),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            BatchSubmissionStatus::Queued,
            BatchSubmissionStatus::Sent,
            BatchSubmissionStatus::Finalized,
        ] {
            assert_eq!(status.as_str().parse::<BatchSubmissionStatus>().unwrap(), status);
        }
        for status in [GethSubmissionQueueStatus::Queued, GethSubmissionQueueStatus::Sent] {
            assert_eq!(status.as_str().parse::<GethSubmissionQueueStatus>().unwrap(), status);
        }
        for status in [
            VerificationStatus::Unverified,
            VerificationStatus::Verified,
            VerificationStatus::Fraudulent,
            VerificationStatus::Removed,
        ] {
            assert_eq!(status.as_str().parse::<VerificationStatus>().unwrap(), status);
        }
        assert!("DISPATCHED".parse::<BatchSubmissionStatus>().is_err());
    }

    #[test]
    fn test_batch_submission_transitions() {
        assert_eq!(BatchSubmissionStatus::Queued.next(), Some(BatchSubmissionStatus::Sent));
        assert_eq!(BatchSubmissionStatus::Sent.next(), Some(BatchSubmissionStatus::Finalized));
        assert_eq!(BatchSubmissionStatus::Finalized.next(), None);
    }

    #[test]
    fn test_verification_terminal_states() {
        assert!(!VerificationStatus::Unverified.is_terminal());
        assert!(!VerificationStatus::Verified.is_terminal());
        assert!(VerificationStatus::Fraudulent.is_terminal());
        assert!(VerificationStatus::Removed.is_terminal());
    }
}
