use crate::name::{decompress_name, Name};
use crate::{Error, Result, CLASS_IN};
use byteorder::{ByteOrder, BE};
use bytes::BufMut;
use dns_types::{Class, RecordType};

// qtype + qclass
const QUESTION_FIXED_LEN: usize = 4;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    name: Name,
    qtype: u16,
    qclass: u16,
    wire_len: usize,
}

impl Question {
    pub fn new(domain: &str, qtype: RecordType) -> Result<Self> {
        let name = Name::from_domain(domain)?;
        let wire_len = name.len() + QUESTION_FIXED_LEN;

        Ok(Self {
            name,
            qtype: qtype.into(),
            qclass: CLASS_IN,
            wire_len,
        })
    }

    pub fn to_bytes<B: BufMut>(&self, bytes: &mut B) {
        bytes.put_slice(self.name.as_bytes());
        bytes.put_u16(self.qtype);
        bytes.put_u16(self.qclass);
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn qtype(&self) -> u16 {
        self.qtype
    }

    pub fn qclass(&self) -> u16 {
        self.qclass
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from(self.qtype)
    }

    pub fn class(&self) -> Class {
        Class::from(self.qclass)
    }

    /// Bytes the question occupied in the packet it was decoded from.
    pub fn wire_len(&self) -> usize {
        self.wire_len
    }
}

/// Decodes the question at `offset`, returning it with its wire length.
pub fn decode_question(packet: &[u8], offset: usize) -> Result<(Question, usize)> {
    let (name, name_len) = decompress_name(packet, offset)?;

    let fixed_begin = offset + name_len;
    let fixed = packet
        .get(fixed_begin..fixed_begin + QUESTION_FIXED_LEN)
        .ok_or(Error::ShortBuffer)?;

    let wire_len = name_len + QUESTION_FIXED_LEN;
    let question = Question {
        name,
        qtype: BE::read_u16(&fixed[0..2]),
        qclass: BE::read_u16(&fixed[2..4]),
        wire_len,
    };

    Ok((question, wire_len))
}
