use std::io::Cursor;

use bytes::{Buf, BufMut, BytesMut};

use super::Rdata;
use crate::{Compressor, DnsError, Name, RecordType, Wire};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mx {
    pub preference: u16,
    pub exchange: Name,
}

impl Mx {
    pub(super) fn decode(rd_length: u16, bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        // Two preference bytes plus at least a root name.
        if rd_length < 3 {
            return Err(DnsError::InvalidRecordData {
                type_: RecordType::Mx,
                reason: "rdata too short for preference and exchange",
            });
        }

        Ok(Self {
            preference: bytes.get_u16(),
            exchange: Name::decode(bytes)?,
        })
    }
}

impl Rdata for Mx {
    fn record_type(&self) -> RecordType {
        RecordType::Mx
    }

    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_u16(self.preference);
        self.exchange.encode(buf, names)
    }
}
