use std::fmt;
use std::io::Cursor;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use derivative::Derivative;
use itertools::Itertools;

use super::Rdata;
use crate::{Compressor, DnsError, RecordType};

/// Fallback rdata for types the codec has no structural knowledge of.
/// The payload is carried byte for byte, so unknown records survive a
/// decode and re-encode untouched.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct Opaque {
    pub type_code: u16,
    #[derivative(Debug(format_with = "fmt_data"))]
    pub data: Bytes,
}

impl Opaque {
    pub(super) fn decode(
        type_code: u16,
        rd_length: u16,
        bytes: &mut Cursor<&[u8]>,
    ) -> Result<Self, DnsError> {
        Ok(Self {
            type_code,
            data: bytes.copy_to_bytes(usize::from(rd_length)),
        })
    }
}

impl Rdata for Opaque {
    fn record_type(&self) -> RecordType {
        RecordType::from_u16(self.type_code)
    }

    fn encode(&self, buf: &mut BytesMut, _names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_slice(&self.data);

        Ok(())
    }
}

fn fmt_data(data: &Bytes, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let preview = data
        .iter()
        .take(8)
        .map(|byte| format!("{byte:02x}"))
        .join(" ");
    if data.len() > 8 {
        write!(f, "[{preview} .. {} bytes]", data.len())
    } else {
        write!(f, "[{preview}]")
    }
}
