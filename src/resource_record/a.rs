use std::io::Cursor;
use std::net::Ipv4Addr;

use bytes::{Buf, BufMut, BytesMut};

use super::Rdata;
use crate::{Compressor, DnsError, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A {
    pub ip: Ipv4Addr,
}

impl A {
    pub(super) fn decode(rd_length: u16, bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        if rd_length != 4 {
            return Err(DnsError::InvalidRecordData {
                type_: RecordType::A,
                reason: "rdata must be exactly 4 bytes",
            });
        }

        Ok(Self {
            ip: Ipv4Addr::from(bytes.get_u32()),
        })
    }
}

impl Rdata for A {
    fn record_type(&self) -> RecordType {
        RecordType::A
    }

    fn encode(&self, buf: &mut BytesMut, _names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_u32(u32::from(self.ip));

        Ok(())
    }
}
