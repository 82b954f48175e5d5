use std::io::Cursor;

use bytes::BytesMut;

use super::Rdata;
use crate::{Compressor, DnsError, Name, RecordType, Wire};

/// The name a reverse-lookup owner points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ptr {
    pub target: Name,
}

impl Ptr {
    pub(super) fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        Ok(Self {
            target: Name::decode(bytes)?,
        })
    }
}

impl Rdata for Ptr {
    fn record_type(&self) -> RecordType {
        RecordType::Ptr
    }

    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        self.target.encode(buf, names)
    }
}
