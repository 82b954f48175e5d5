use std::io::Cursor;

use bytes::{Buf, BufMut, BytesMut};
use tracing::instrument;

use super::{Name, Wire};
use crate::{CLASS_IN, Compressor, DnsError, RecordType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: Name,
    pub type_: RecordType,
    pub class: u16,
}

impl Question {
    pub fn new(name: Name, type_: RecordType) -> Self {
        Self {
            name,
            type_,
            class: CLASS_IN,
        }
    }
}

impl Wire for Question {
    #[instrument(level = "trace", skip_all)]
    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        self.name.encode(buf, names)?;
        buf.put_u16(self.type_.to_u16());
        buf.put_u16(self.class);

        Ok(())
    }

    #[instrument(level = "trace", skip_all)]
    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let name = Name::decode(bytes)?;

        if bytes.remaining() < 4 {
            return Err(DnsError::TruncatedMessage {
                needed: 4,
                available: bytes.remaining(),
            });
        }

        let type_ = RecordType::from_u16(bytes.get_u16());
        let class = bytes.get_u16();

        Ok(Self { name, type_, class })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_internet_class() {
        let question = Question::new("example.com".parse().unwrap(), RecordType::A);
        assert_eq!(question.class, CLASS_IN);
    }

    #[test]
    fn round_trips() {
        let question = Question::new("www.example.com".parse().unwrap(), RecordType::Aaaa);

        let mut buf = BytesMut::new();
        question
            .encode(&mut buf, &mut Compressor::default())
            .unwrap();

        let decoded = Question::decode(&mut Cursor::new(&buf[..])).unwrap();
        assert_eq!(decoded, question);
    }

    #[test]
    fn missing_type_and_class_is_rejected() {
        let bytes = b"\x03www\x00\x00";
        let err = Question::decode(&mut Cursor::new(&bytes[..])).unwrap_err();
        assert!(matches!(err, DnsError::TruncatedMessage { .. }));
    }
}
