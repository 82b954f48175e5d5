use std::io::Cursor;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::Rdata;
use crate::{Compressor, DnsError, RecordType};

/// A sequence of character-strings, each at most 255 bytes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Txt {
    pub strings: Vec<Bytes>,
}

impl Txt {
    pub(super) fn decode(rd_length: u16, bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let rd_length = usize::from(rd_length);
        let mut strings = Vec::new();
        let mut consumed = 0;

        while consumed < rd_length {
            let len = usize::from(bytes.get_u8());
            if consumed + 1 + len > rd_length {
                return Err(DnsError::InvalidRecordData {
                    type_: RecordType::Txt,
                    reason: "character-string runs past the declared length",
                });
            }

            strings.push(bytes.copy_to_bytes(len));
            consumed += 1 + len;
        }

        Ok(Self { strings })
    }
}

impl Rdata for Txt {
    fn record_type(&self) -> RecordType {
        RecordType::Txt
    }

    fn encode(&self, buf: &mut BytesMut, _names: &mut Compressor) -> Result<(), DnsError> {
        for string in &self.strings {
            if string.len() > 255 {
                return Err(DnsError::InvalidRecordData {
                    type_: RecordType::Txt,
                    reason: "character-string exceeds 255 bytes",
                });
            }

            buf.put_u8(string.len() as u8);
            buf.put_slice(string);
        }

        Ok(())
    }
}
