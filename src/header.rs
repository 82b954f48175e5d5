use std::io::Cursor;

use bitfield::bitfield;
use bytes::{Buf, BufMut, BytesMut};
use tracing::{instrument, warn};

use super::Wire;
use crate::{Compressor, DnsError};

bitfield! {
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct Flags(u16);
    impl Debug;
    u8;
    // query or response
    pub qr, set_qr: 15;
    // query type
    pub opcode, set_opcode: 14, 11;
    // authoritative answerer
    pub aa, set_aa: 10;
    // truncation
    pub tc, set_tc: 9;
    // recursion desired
    pub rd, set_rd: 8;
    // recursion available
    pub ra, set_ra: 7;
    // reserved
    pub z, set_z: 6, 4;
    // response code
    pub rcode, set_rcode: 3, 0;
}

impl Wire for Flags {
    #[instrument(level = "trace", skip_all)]
    fn encode(&self, buf: &mut BytesMut, _names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_u16(self.0);

        Ok(())
    }

    #[instrument(level = "trace", skip_all)]
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        if bytes.remaining() < 2 {
            return Err(DnsError::TruncatedMessage {
                needed: 2,
                available: bytes.remaining(),
            });
        }

        Ok(Self(bytes.get_u16()))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Header {
    pub id: u16,
    pub flags: Flags,
    pub num_questions: u16,
    pub num_answers: u16,
    pub num_authorities: u16,
    pub num_additionals: u16,
}

impl Header {
    pub fn new(id: u16, flags: Flags) -> Self {
        Self {
            id,
            flags,
            ..Default::default()
        }
    }
}

impl Wire for Header {
    #[instrument(level = "trace", skip_all)]
    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        buf.put_u16(self.id);
        self.flags.encode(buf, names)?;
        buf.put_u16(self.num_questions);
        buf.put_u16(self.num_answers);
        buf.put_u16(self.num_authorities);
        buf.put_u16(self.num_additionals);

        Ok(())
    }

    #[instrument(level = "trace", skip_all)]
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        if bytes.remaining() < 12 {
            warn!("insufficient remaining bytes");
            return Err(DnsError::TruncatedMessage {
                needed: 12,
                available: bytes.remaining(),
            });
        }

        let id = bytes.get_u16();
        let flags = Flags::decode(bytes)?;
        let qd_count = bytes.get_u16();
        let an_count = bytes.get_u16();
        let ns_count = bytes.get_u16();
        let ar_count = bytes.get_u16();

        Ok(Self {
            id,
            flags,
            num_questions: qd_count,
            num_answers: an_count,
            num_authorities: ns_count,
            num_additionals: ar_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_land_in_the_right_positions() {
        let mut flags = Flags::default();
        flags.set_rd(true);
        assert_eq!(flags.0, 0x0100);

        flags.set_qr(true);
        flags.set_rcode(3);
        assert_eq!(flags.0, 0x8103);
    }

    #[test]
    fn reserved_bits_survive_a_round_trip() {
        let flags = Flags(0x0070);
        let mut buf = BytesMut::new();
        flags.encode(&mut buf, &mut Compressor::default()).unwrap();

        let decoded = Flags::decode(&mut Cursor::new(&buf[..])).unwrap();
        assert_eq!(decoded.z(), 7);
        assert_eq!(decoded.0, 0x0070);
    }

    #[test]
    fn header_round_trips() {
        let mut flags = Flags::default();
        flags.set_qr(true);
        flags.set_ra(true);
        let mut header = Header::new(0xabcd, flags);
        header.num_questions = 1;
        header.num_answers = 2;

        let mut buf = BytesMut::new();
        header.encode(&mut buf, &mut Compressor::default()).unwrap();
        assert_eq!(buf.len(), 12);

        let decoded = Header::decode(&mut Cursor::new(&buf[..])).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let bytes = [0u8; 11];
        let err = Header::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::TruncatedMessage { .. }));
    }
}
