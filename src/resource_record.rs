use std::io::Cursor;

use bytes::{Buf, BufMut, BytesMut};
use enum_dispatch::enum_dispatch;
use tracing::{debug, instrument};

use super::{Name, Wire};
use crate::{CLASS_IN, Compressor, DnsError, RecordType};

mod a;
pub use a::A;

mod aaaa;
pub use aaaa::Aaaa;

mod cname;
pub use cname::Cname;

mod mx;
pub use mx::Mx;

mod ns;
pub use ns::Ns;

mod opaque;
pub use opaque::Opaque;

mod ptr;
pub use ptr::Ptr;

mod txt;
pub use txt::Txt;

/// Encode half of the rdata codec, implemented per record shape.
/// Decoding stays on [`RecordData`]: it dispatches on the type code, not
/// on a value.
#[enum_dispatch]
pub trait Rdata {
    fn record_type(&self) -> RecordType;

    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError>;
}

/// Payload of one resource record: a typed variant for the shapes the
/// codec understands, opaque bytes for everything else.
#[enum_dispatch(Rdata)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A,
    Aaaa,
    Cname,
    Ns,
    Ptr,
    Mx,
    Txt,
    Opaque,
}

impl RecordData {
    pub fn decode(
        type_: RecordType,
        rd_length: u16,
        bytes: &mut Cursor<&[u8]>,
    ) -> Result<Self, DnsError> {
        let end = bytes.position() + u64::from(rd_length);

        let data = match type_ {
            RecordType::A => A::decode(rd_length, bytes)?.into(),
            RecordType::Aaaa => Aaaa::decode(rd_length, bytes)?.into(),
            RecordType::Cname => Cname::decode(bytes)?.into(),
            RecordType::Ns => Ns::decode(bytes)?.into(),
            RecordType::Ptr => Ptr::decode(bytes)?.into(),
            RecordType::Mx => Mx::decode(rd_length, bytes)?.into(),
            RecordType::Txt => Txt::decode(rd_length, bytes)?.into(),
            RecordType::Soa | RecordType::Opt | RecordType::Unknown(_) => {
                debug!(%type_, rd_length, "keeping rdata of unhandled type opaque");
                Opaque::decode(type_.to_u16(), rd_length, bytes)?.into()
            }
        };

        if bytes.position() != end {
            return Err(DnsError::InvalidRecordData {
                type_,
                reason: "rdata does not fill its declared length",
            });
        }

        Ok(data)
    }
}

/// One resource record. The type code is not stored; it follows from the
/// payload variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: Name,
    pub class: u16,
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: Name, ttl: u32, data: RecordData) -> Self {
        Self {
            name,
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

impl Wire for ResourceRecord {
    #[instrument(level = "trace", skip_all)]
    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        self.name.encode(buf, names)?;
        buf.put_u16(self.record_type().to_u16());
        buf.put_u16(self.class);
        buf.put_u32(self.ttl);

        // Rdata is encoded in place rather than in a scratch buffer, so
        // names inside it keep message-relative offsets. The length is
        // patched in afterward.
        let length_at = buf.len();
        buf.put_u16(0);
        self.data.encode(buf, names)?;

        let rd_length = buf.len() - length_at - 2;
        let rd_length = u16::try_from(rd_length).map_err(|_| DnsError::InvalidRecordData {
            type_: self.record_type(),
            reason: "rdata exceeds 65535 bytes",
        })?;
        buf[length_at..length_at + 2].copy_from_slice(&rd_length.to_be_bytes());

        Ok(())
    }

    #[instrument(level = "trace", skip_all)]
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let name = Name::decode(bytes)?;

        if bytes.remaining() < 10 {
            return Err(DnsError::TruncatedMessage {
                needed: 10,
                available: bytes.remaining(),
            });
        }

        let type_ = RecordType::from_u16(bytes.get_u16());
        let class = bytes.get_u16();
        let ttl = bytes.get_u32();
        let rd_length = bytes.get_u16();

        if bytes.remaining() < rd_length as usize {
            return Err(DnsError::TruncatedMessage {
                needed: rd_length as usize,
                available: bytes.remaining(),
            });
        }

        let data = RecordData::decode(type_, rd_length, bytes)?;

        Ok(Self {
            name,
            class,
            ttl,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use bytes::Bytes;

    use super::*;

    fn round_trip(record: &ResourceRecord) -> ResourceRecord {
        let mut buf = BytesMut::new();
        record.encode(&mut buf, &mut Compressor::default()).unwrap();
        ResourceRecord::decode(&mut Cursor::new(&buf[..])).unwrap()
    }

    #[test]
    fn a_record_layout() {
        let record = ResourceRecord::new(
            "example.com".parse().unwrap(),
            300,
            RecordData::from(A {
                ip: Ipv4Addr::new(93, 184, 216, 34),
            }),
        );

        let mut buf = BytesMut::new();
        record.encode(&mut buf, &mut Compressor::default()).unwrap();

        // TYPE, CLASS, TTL, RDLENGTH, then the four address bytes.
        let tail = b"\x00\x01\x00\x01\x00\x00\x01\x2c\x00\x04\x5d\xb8\xd8\x22";
        assert_eq!(&buf[13..], tail);
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn wrong_a_payload_length_is_rejected() {
        let bytes = b"\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x03\x01\x02\x03";
        let err = ResourceRecord::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::InvalidRecordData { .. }));
    }

    #[test]
    fn aaaa_round_trips() {
        let ip: Ipv6Addr = "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap();
        let record = ResourceRecord::new(
            "example.com".parse().unwrap(),
            86400,
            RecordData::from(Aaaa { ip }),
        );
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn mx_round_trips_with_a_compressed_exchange() {
        let record = ResourceRecord::new(
            "example.com".parse().unwrap(),
            3600,
            RecordData::from(Mx {
                preference: 10,
                exchange: "mail.example.com".parse().unwrap(),
            }),
        );
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn txt_strings_round_trip() {
        let record = ResourceRecord::new(
            "example.com".parse().unwrap(),
            60,
            RecordData::from(Txt {
                strings: vec![Bytes::from_static(b"v=spf1 -all"), Bytes::from_static(b"x")],
            }),
        );
        assert_eq!(round_trip(&record), record);
    }

    #[test]
    fn txt_string_past_declared_length_is_rejected() {
        // One character-string claiming 5 bytes inside a 4 byte rdata.
        let bytes = b"\x00\x00\x10\x00\x01\x00\x00\x00\x3c\x00\x04\x05abc";
        let err = ResourceRecord::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::InvalidRecordData { .. }));
    }

    #[test]
    fn unknown_type_is_carried_opaquely() {
        let record = ResourceRecord::new(
            "example.com".parse().unwrap(),
            120,
            RecordData::from(Opaque {
                type_code: 999,
                data: Bytes::from_static(&[1, 2, 3, 4]),
            }),
        );

        let decoded = round_trip(&record);
        assert_eq!(decoded, record);
        assert_eq!(decoded.record_type(), RecordType::Unknown(999));
    }

    #[test]
    fn cname_rdata_must_fill_its_declared_length() {
        // The name ends after 5 bytes but RDLENGTH claims 7.
        let bytes = b"\x00\x00\x05\x00\x01\x00\x00\x00\x3c\x00\x07\x03foo\x00\x00\x00";
        let err = ResourceRecord::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::InvalidRecordData { .. }));
    }

    #[test]
    fn truncated_rdata_is_rejected() {
        let bytes = b"\x00\x00\x01\x00\x01\x00\x00\x00\x3c\x00\x04\x01\x02";
        let err = ResourceRecord::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::TruncatedMessage { .. }));
    }
}
