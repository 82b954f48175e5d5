use std::io::Cursor;

use bytes::BytesMut;

use super::Rdata;
use crate::{Compressor, DnsError, Name, RecordType, Wire};

/// An authoritative nameserver for the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ns {
    pub target: Name,
}

impl Ns {
    pub(super) fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        Ok(Self {
            target: Name::decode(bytes)?,
        })
    }
}

impl Rdata for Ns {
    fn record_type(&self) -> RecordType {
        RecordType::Ns
    }

    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        self.target.encode(buf, names)
    }
}
