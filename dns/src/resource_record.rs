use crate::name::{decompress_name, Name};
use crate::{Error, Result};
use byteorder::{ByteOrder, BE};
use dns_types::{Class, RecordType};

// type(2) + class(2) + ttl(4) + rdlength(2)
const RR_FIXED_LEN: usize = 10;

/// A resource record whose RDATA is a view into the packet it was decoded from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResourceRecord<'a> {
    name: Name,
    rtype: u16,
    rclass: u16,
    ttl: u32,
    rdlength: u16,
    rdata: &'a [u8],
    wire_len: usize,
}

impl<'a> ResourceRecord<'a> {
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn rtype(&self) -> u16 {
        self.rtype
    }

    pub fn rclass(&self) -> u16 {
        self.rclass
    }

    pub fn record_type(&self) -> RecordType {
        RecordType::from(self.rtype)
    }

    pub fn class(&self) -> Class {
        Class::from(self.rclass)
    }

    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    pub fn rdlength(&self) -> u16 {
        self.rdlength
    }

    pub fn rdata(&self) -> &'a [u8] {
        self.rdata
    }

    pub fn wire_len(&self) -> usize {
        self.wire_len
    }
}

/// Decodes the resource record at `offset`, returning it with its wire length.
///
/// RDATA is not copied: the record borrows it from `packet`.
pub fn decode_rr(packet: &[u8], offset: usize) -> Result<(ResourceRecord<'_>, usize)> {
    let (name, name_len) = decompress_name(packet, offset)?;

    let fixed_begin = offset + name_len;
    let fixed = packet
        .get(fixed_begin..fixed_begin + RR_FIXED_LEN)
        .ok_or(Error::ShortBuffer)?;

    let rtype = BE::read_u16(&fixed[0..2]);
    let rclass = BE::read_u16(&fixed[2..4]);
    let ttl = BE::read_u32(&fixed[4..8]);
    let rdlength = BE::read_u16(&fixed[8..10]);

    let rdata_begin = fixed_begin + RR_FIXED_LEN;
    let rdata = packet
        .get(rdata_begin..rdata_begin + usize::from(rdlength))
        .ok_or(Error::ShortBuffer)?;

    let wire_len = name_len + RR_FIXED_LEN + usize::from(rdlength);
    let record = ResourceRecord {
        name,
        rtype,
        rclass,
        ttl,
        rdlength,
        rdata,
        wire_len,
    };

    Ok((record, wire_len))
}
