use thiserror::Error;

use crate::RecordType;

/// Everything that can go wrong while encoding or decoding a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    #[error("label of {0} bytes exceeds the 63 byte limit")]
    LabelTooLong(usize),

    #[error("name of {0} octets exceeds the 255 octet limit")]
    NameTooLong(usize),

    #[error("empty label")]
    EmptyLabel,

    #[error("compression pointer at offset {at} does not point backward (target {target})")]
    MalformedPointer { at: u64, target: u64 },

    #[error("reserved label type in length octet {0:#04x}")]
    UnsupportedLabelType(u8),

    #[error("message truncated: {needed} bytes needed, {available} available")]
    TruncatedMessage { needed: usize, available: usize },

    #[error("invalid {type_} record data: {reason}")]
    InvalidRecordData {
        type_: RecordType,
        reason: &'static str,
    },

    #[error("{section} section holds {len} entries, more than a header count can carry")]
    CountMismatch { section: &'static str, len: usize },

    #[error("unknown record type name {0:?}")]
    UnknownRecordType(String),
}
