use std::io::Cursor;

use bytes::BytesMut;

use super::Rdata;
use crate::{Compressor, DnsError, Name, RecordType, Wire};

/// The canonical name the owner is an alias for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cname {
    pub target: Name,
}

impl Cname {
    pub(super) fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        Ok(Self {
            target: Name::decode(bytes)?,
        })
    }
}

impl Rdata for Cname {
    fn record_type(&self) -> RecordType {
        RecordType::Cname
    }

    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        self.target.encode(buf, names)
    }
}
