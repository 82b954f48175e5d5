use std::io::Cursor;

use bytes::{Bytes, BytesMut};
use tracing::instrument;

use super::{Header, Question, ResourceRecord, Wire};
use crate::{Compressor, DnsError, Flags, Name, RecordType};

/// A complete DNS message.
///
/// The section vectors are authoritative: encoding recomputes the header
/// counts from them, so a stale count in [`Message::header`] is
/// overridden rather than trusted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            ..Default::default()
        }
    }

    /// A recursion-desired query for one name and type, with a random id.
    pub fn query(name: Name, type_: RecordType) -> Self {
        Self::query_with_id(rand::random(), name, type_)
    }

    pub fn query_with_id(id: u16, name: Name, type_: RecordType) -> Self {
        let mut flags = Flags::default();
        flags.set_rd(true);

        let mut message = Self::new(Header::new(id, flags));
        message.add_question(Question::new(name, type_));

        message
    }

    pub fn add_question(&mut self, question: Question) {
        self.header.num_questions += 1;
        self.questions.push(question)
    }

    pub fn add_answer(&mut self, answer: ResourceRecord) {
        self.header.num_answers += 1;
        self.answers.push(answer)
    }

    pub fn add_authority(&mut self, authority: ResourceRecord) {
        self.header.num_authorities += 1;
        self.authorities.push(authority)
    }

    pub fn add_additional(&mut self, additional: ResourceRecord) {
        self.header.num_additionals += 1;
        self.additionals.push(additional)
    }

    #[instrument(level = "debug", skip_all)]
    pub fn to_bytes(&self) -> Result<Bytes, DnsError> {
        let mut header = self.header.clone();
        header.num_questions = section_count("question", self.questions.len())?;
        header.num_answers = section_count("answer", self.answers.len())?;
        header.num_authorities = section_count("authority", self.authorities.len())?;
        header.num_additionals = section_count("additional", self.additionals.len())?;

        let mut buf = BytesMut::with_capacity(512);
        let mut names = Compressor::default();

        header.encode(&mut buf, &mut names)?;
        for question in self.questions.iter() {
            question.encode(&mut buf, &mut names)?;
        }
        for record in self.answers.iter() {
            record.encode(&mut buf, &mut names)?;
        }
        for record in self.authorities.iter() {
            record.encode(&mut buf, &mut names)?;
        }
        for record in self.additionals.iter() {
            record.encode(&mut buf, &mut names)?;
        }

        Ok(buf.freeze())
    }

    /// Parses one message. Bytes past the sections the header declares
    /// are ignored; framing is the caller's concern.
    #[instrument(level = "debug", skip_all)]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DnsError> {
        let mut cursor = Cursor::new(bytes);

        let header = Header::decode(&mut cursor)?;

        let mut questions = Vec::new();
        for _ in 0..header.num_questions {
            questions.push(Question::decode(&mut cursor)?);
        }

        let mut answers = Vec::new();
        for _ in 0..header.num_answers {
            answers.push(ResourceRecord::decode(&mut cursor)?);
        }

        let mut authorities = Vec::new();
        for _ in 0..header.num_authorities {
            authorities.push(ResourceRecord::decode(&mut cursor)?);
        }

        let mut additionals = Vec::new();
        for _ in 0..header.num_additionals {
            additionals.push(ResourceRecord::decode(&mut cursor)?);
        }

        Ok(Self {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

fn section_count(section: &'static str, len: usize) -> Result<u16, DnsError> {
    u16::try_from(len).map_err(|_| DnsError::CountMismatch { section, len })
}
