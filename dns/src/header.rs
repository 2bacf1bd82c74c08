use crate::{Error, Result, HEADER_SIZE};
use byteorder::{ByteOrder, BE};
use dns_types::{Opcode, Rcode};

pub const FLAG_QR: u16 = 1 << 15;
pub const FLAG_AA: u16 = 1 << 10;
pub const FLAG_TC: u16 = 1 << 9;
pub const FLAG_RD: u16 = 1 << 8;
pub const FLAG_RA: u16 = 1 << 7;

const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const RCODE_MASK: u16 = 0x0F;

// 12 bytes
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,

    // derived from `flags`
    qr: bool,
    opcode: u8,
    aa: bool,
    tc: bool,
    rd: bool,
    ra: bool,
    rcode: u8,
}

impl Header {
    pub fn new(id: u16, flags: u16, qdcount: u16, ancount: u16, nscount: u16, arcount: u16) -> Self {
        Self {
            id,
            flags,
            qdcount,
            ancount,
            nscount,
            arcount,
            qr: flags & FLAG_QR != 0,
            opcode: ((flags >> OPCODE_SHIFT) & OPCODE_MASK) as u8,
            aa: flags & FLAG_AA != 0,
            tc: flags & FLAG_TC != 0,
            rd: flags & FLAG_RD != 0,
            ra: flags & FLAG_RA != 0,
            rcode: (flags & RCODE_MASK) as u8,
        }
    }

    /// A standard query with recursion desired and a single question.
    pub fn query(id: u16) -> Self {
        Self::new(id, FLAG_RD, 1, 0, 0, 0)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        encode_header(
            self.id,
            self.flags,
            self.qdcount,
            self.ancount,
            self.nscount,
            self.arcount,
        )
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn qd_count(&self) -> u16 {
        self.qdcount
    }

    pub fn answer_count(&self) -> u16 {
        self.ancount
    }

    pub fn authority_count(&self) -> u16 {
        self.nscount
    }

    pub fn additional_count(&self) -> u16 {
        self.arcount
    }

    pub fn is_response(&self) -> bool {
        self.qr
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from(self.opcode)
    }

    pub fn is_authoritative(&self) -> bool {
        self.aa
    }

    pub fn is_truncated(&self) -> bool {
        self.tc
    }

    pub fn recursion_desired(&self) -> bool {
        self.rd
    }

    pub fn recursion_available(&self) -> bool {
        self.ra
    }

    pub fn rcode(&self) -> Rcode {
        Rcode::from(self.rcode)
    }
}

/// Decodes the fixed 12-byte header at the start of `packet`.
pub fn decode_header(packet: &[u8]) -> Result<Header> {
    let bytes = packet.get(..HEADER_SIZE).ok_or(Error::ShortBuffer)?;

    let id = BE::read_u16(&bytes[0..2]);
    let flags = BE::read_u16(&bytes[2..4]);
    let qdcount = BE::read_u16(&bytes[4..6]);
    let ancount = BE::read_u16(&bytes[6..8]);
    let nscount = BE::read_u16(&bytes[8..10]);
    let arcount = BE::read_u16(&bytes[10..12]);

    Ok(Header::new(id, flags, qdcount, ancount, nscount, arcount))
}

pub fn encode_header(
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];
    BE::write_u16_into(&[id, flags, qdcount, ancount, nscount, arcount], &mut bytes);

    bytes
}
