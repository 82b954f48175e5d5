use std::collections::HashMap;
use std::fmt::Display;
use std::io::Cursor;
use std::str::FromStr;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use itertools::Itertools;
use tracing::warn;

use super::Wire;
use crate::DnsError;

/// Longest label the wire format can carry, in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name in octets, counting length bytes and the root
/// terminator.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u16 = 0xC000;
const MAX_POINTER_OFFSET: u16 = 0x3FFF;

/// A domain name as an ordered list of labels, root last and implicit.
///
/// Label bytes are kept verbatim: a decoded name preserves the case it
/// had on the wire and equality is byte exact. Case folding happens only
/// when the encoder looks for compressible suffixes.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct Name {
    pub labels: Vec<Bytes>,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    /// Encoded length in octets, including per-label length bytes and the
    /// terminating zero. Compression can only shrink this.
    pub fn wire_len(&self) -> usize {
        self.labels.iter().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    /// Suffixes of the name, longest first.
    /// E.g. www.example.com -> [www.example.com, example.com, com]
    pub fn iter_suffixes(&self) -> impl Iterator<Item = &[Bytes]> + '_ {
        (0..self.labels.len()).map(move |i| &self.labels[i..])
    }
}

impl FromStr for Name {
    type Err = DnsError;

    /// Parses a dotted name. One trailing dot is accepted, "." is the
    /// root, and empty interior labels are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "." {
            return Ok(Self::root());
        }

        let s = s.strip_suffix('.').unwrap_or(s);
        if s.is_empty() {
            return Err(DnsError::EmptyLabel);
        }

        let mut labels = Vec::new();
        for label in s.split('.') {
            if label.is_empty() {
                return Err(DnsError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::LabelTooLong(label.len()));
            }

            labels.push(Bytes::copy_from_slice(label.as_bytes()));
        }

        let name = Self { labels };
        if name.wire_len() > MAX_NAME_LEN {
            return Err(DnsError::NameTooLong(name.wire_len()));
        }

        Ok(name)
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }

        let dotted = self
            .labels
            .iter()
            .map(|label| String::from_utf8_lossy(label))
            .join(".");
        f.write_str(&dotted)
    }
}

/// Compression table for one encode pass: every name suffix already
/// written, keyed case folded, mapped to the message offset where it
/// starts. Offsets past the 14 bit pointer range are not registered.
#[derive(Debug, Default)]
pub struct Compressor {
    offsets: HashMap<Vec<Vec<u8>>, u16>,
}

impl Compressor {
    fn lookup(&self, suffix: &[Bytes]) -> Option<u16> {
        self.offsets.get(&Self::key(suffix)).copied()
    }

    fn register(&mut self, suffix: &[Bytes], offset: usize) {
        let offset = match u16::try_from(offset) {
            Ok(offset) if offset <= MAX_POINTER_OFFSET => offset,
            _ => return,
        };

        // Keep the first occurrence: it is the only one every later name
        // can point back to.
        self.offsets.entry(Self::key(suffix)).or_insert(offset);
    }

    fn key(suffix: &[Bytes]) -> Vec<Vec<u8>> {
        suffix.iter().map(|label| label.to_ascii_lowercase()).collect()
    }
}

impl Wire for Name {
    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError> {
        for label in &self.labels {
            if label.is_empty() {
                return Err(DnsError::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DnsError::LabelTooLong(label.len()));
            }
        }
        if self.wire_len() > MAX_NAME_LEN {
            return Err(DnsError::NameTooLong(self.wire_len()));
        }

        for suffix in self.iter_suffixes() {
            if let Some(offset) = names.lookup(suffix) {
                buf.put_u16(POINTER_MASK | offset);
                return Ok(());
            }

            names.register(suffix, buf.len());
            let label = &suffix[0];
            buf.put_u8(label.len() as u8);
            buf.put_slice(label);
        }

        buf.put_u8(0);

        Ok(())
    }

    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError> {
        let mut labels = Vec::new();
        // Length of the uncompressed form, terminator included. The 255
        // octet cap bounds the label loop even across pointer jumps.
        let mut wire_len = 1usize;
        let mut resume = None;

        loop {
            if bytes.remaining() < 1 {
                return Err(DnsError::TruncatedMessage {
                    needed: 1,
                    available: bytes.remaining(),
                });
            }

            let at = bytes.position();
            let len = bytes.get_u8();

            match len & 0b1100_0000 {
                0b0000_0000 => {
                    if len == 0 {
                        break;
                    }

                    let len = len as usize;
                    if bytes.remaining() < len {
                        return Err(DnsError::TruncatedMessage {
                            needed: len,
                            available: bytes.remaining(),
                        });
                    }

                    wire_len += 1 + len;
                    if wire_len > MAX_NAME_LEN {
                        return Err(DnsError::NameTooLong(wire_len));
                    }

                    labels.push(bytes.copy_to_bytes(len));
                }
                0b1100_0000 => {
                    if bytes.remaining() < 1 {
                        return Err(DnsError::TruncatedMessage {
                            needed: 1,
                            available: bytes.remaining(),
                        });
                    }

                    let target =
                        u64::from((u16::from(len & 0b0011_1111) << 8) | u16::from(bytes.get_u8()));
                    if target >= at {
                        warn!(at, target, "compression pointer does not point backward");
                        return Err(DnsError::MalformedPointer { at, target });
                    }

                    if resume.is_none() {
                        resume = Some(bytes.position());
                    }
                    bytes.set_position(target);
                }
                _ => {
                    warn!(octet = len, "reserved label type");
                    return Err(DnsError::UnsupportedLabelType(len));
                }
            }
        }

        if let Some(position) = resume {
            bytes.set_position(position);
        }

        Ok(Self { labels })
    }
}
