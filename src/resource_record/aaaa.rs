use std::io::Cursor;
use std::net::Ipv6Addr;

use bytes::{Buf, BufMut, BytesMut};

use super::Rdata;
use crate::{Compressor, DnsError, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aaaa {
    pub ip: Ipv6Addr,
}

impl Aaaa {
    pub(super) fn decode(rd_length: u16, bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        if rd_length != 16 {
            return Err(DnsError::InvalidRecordData {
                type_: RecordType::Aaaa,
                reason: "rdata must be exactly 16 bytes",
            });
        }

        Ok(Self {
            ip: Ipv6Addr::from(bytes.get_u128()),
        })
    }
}

impl Rdata for Aaaa {
    fn record_type(&self) -> RecordType {
        RecordType::Aaaa
    }

    fn encode(&self, buf: &mut BytesMut, _names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_u128(u128::from(self.ip));

        Ok(())
    }
}
