//! Codec for the DNS message wire format of RFC 1035 section 4: names
//! with compression pointers, typed record data for the common record
//! types, and whole-message assembly and parsing. No transport, no
//! resolution logic.

use std::io::Cursor;

use bytes::BytesMut;

mod error;
pub use error::DnsError;

mod header;
pub use header::{Flags, Header};

mod name;
pub use name::{Compressor, MAX_LABEL_LEN, MAX_NAME_LEN, Name};

mod message;
pub use message::Message;

mod question;
pub use question::Question;

mod resource_record;
pub use resource_record::{
    A, Aaaa, Cname, Mx, Ns, Opaque, Ptr, Rdata, RecordData, ResourceRecord, Txt,
};

mod record_type;
pub use record_type::RecordType;

/// The Internet class code, the default wherever a class is defaulted.
pub const CLASS_IN: u16 = 1;

/// Wire codec for one message component.
///
/// Encoding appends to the message built so far; name offsets are
/// message-relative, so components share one buffer and one compression
/// table per message. Decoding reads from a cursor over the full message,
/// which keeps earlier bytes reachable for compression pointers.
pub trait Wire: Sized {
    fn encode(&self, buf: &mut BytesMut, names: &mut Compressor) -> Result<(), DnsError>;

    fn decode(bytes: &mut Cursor<&[u8]>) -> Result<Self, DnsError>;
}
