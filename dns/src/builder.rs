//! Encoders for assembling responses.
//!
//! The `build_*` functions never fail. They write into any `BufMut`; a growable
//! buffer such as `BytesMut` or `Vec<u8>` always has room, a fixed `&mut [u8]`
//! must be sized by the caller.

use crate::header::{decode_header, encode_header, FLAG_AA, FLAG_QR, FLAG_RA, FLAG_RD};
use crate::question::decode_question;
use crate::{Result, CLASS_IN, HEADER_SIZE, TYPE_A};
use bytes::{BufMut, Bytes, BytesMut};
use std::net::Ipv4Addr;

// type(2) + class(2) + ttl(4) + rdlength(2) + IPv4 address(4)
pub const A_RECORD_FIXED_LEN: usize = 14;

// Compression pointer to the first question name, right after the header.
const QUESTION_NAME_POINTER: [u8; 2] = [0xC0, HEADER_SIZE as u8];

/// Writes a 12-byte header and returns the number of bytes written.
pub fn build_header<B: BufMut>(
    out: &mut B,
    id: u16,
    flags: u16,
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
) -> usize {
    out.put_slice(&encode_header(id, flags, qdcount, ancount, nscount, arcount));
    HEADER_SIZE
}

/// Copies `qlen` bytes of question section from `packet` at `offset` as-is.
///
/// # Panics
///
/// Panics if `offset + qlen` is past the end of `packet`.
pub fn copy_question<B: BufMut>(out: &mut B, packet: &[u8], offset: usize, qlen: usize) -> usize {
    out.put_slice(&packet[offset..offset + qlen]);
    qlen
}

/// Writes an A record owned by `name`, which may be a full wire-format name
/// or a compression pointer.
pub fn build_a_record<B: BufMut>(out: &mut B, name: &[u8], ttl: u32, addr: Ipv4Addr) -> usize {
    out.put_slice(name);
    out.put_u16(TYPE_A);
    out.put_u16(CLASS_IN);
    out.put_u32(ttl);
    out.put_u16(4);
    out.put_slice(&addr.octets());

    name.len() + A_RECORD_FIXED_LEN
}

/// Answers `query` with a single A record for its first question.
///
/// The response keeps the query id and RD bit, sets QR, AA and RA, echoes the
/// question verbatim and points the answer name back at it.
pub fn encode_a_response(query: &[u8], ttl: u32, addr: Ipv4Addr) -> Result<Bytes> {
    let header = decode_header(query)?;
    let (_, qlen) = decode_question(query, HEADER_SIZE)?;

    let flags = FLAG_QR | FLAG_AA | FLAG_RA | (header.flags() & FLAG_RD);

    let capacity = HEADER_SIZE + qlen + QUESTION_NAME_POINTER.len() + A_RECORD_FIXED_LEN;
    let mut out = BytesMut::with_capacity(capacity);

    build_header(&mut out, header.id(), flags, 1, 1, 0, 0);
    copy_question(&mut out, query, HEADER_SIZE, qlen);
    build_a_record(&mut out, &QUESTION_NAME_POINTER, ttl, addr);

    Ok(out.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_record::decode_rr;
    use crate::samples::{SAMPLE_QUERY, SAMPLE_RESPONSE};
    use crate::Error;

    #[test]
    fn build_header_test() {
        let mut out = BytesMut::new();
        let n = build_header(&mut out, 0x1234, 0x8180, 1, 1, 0, 0);

        assert_eq!(n, HEADER_SIZE);
        assert_eq!(&out[..], &SAMPLE_RESPONSE[..HEADER_SIZE]);
    }

    #[test]
    fn build_header_into_slice_test() {
        let mut buf = [0xFFu8; 16];
        let n = build_header(&mut &mut buf[..], 1, 2, 3, 4, 5, 6);

        assert_eq!(n, HEADER_SIZE);
        assert_eq!(buf[..HEADER_SIZE], [0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 6]);
        assert_eq!(buf[HEADER_SIZE..], [0xFF; 4]);
    }

    #[test]
    fn copy_question_test() {
        let mut out: Vec<u8> = vec![];
        let n = copy_question(&mut out, &SAMPLE_QUERY, HEADER_SIZE, 21);

        assert_eq!(n, 21);
        assert_eq!(&out[..], &SAMPLE_QUERY[HEADER_SIZE..]);
    }

    #[test]
    fn build_a_record_test() {
        let mut out: Vec<u8> = vec![];
        let addr = Ipv4Addr::new(93, 184, 216, 34);
        let n = build_a_record(&mut out, &QUESTION_NAME_POINTER, 300, addr);

        assert_eq!(n, 16);
        assert_eq!(&out[..], &SAMPLE_RESPONSE[33..]);
    }

    #[test]
    fn build_a_record_full_name_test() {
        let mut packet: Vec<u8> = vec![];
        let name = &SAMPLE_QUERY[HEADER_SIZE..HEADER_SIZE + 17];
        let n = build_a_record(&mut packet, name, 60, Ipv4Addr::new(10, 0, 0, 1));

        assert_eq!(n, 17 + A_RECORD_FIXED_LEN);

        let (rr, wire_len) = decode_rr(&packet, 0).unwrap();
        assert_eq!(wire_len, n);
        assert_eq!(rr.name().to_dotted(), "www.example.com");
        assert_eq!(rr.ttl(), 60);
        assert_eq!(rr.rdata(), &[10, 0, 0, 1]);
    }

    #[test]
    fn encode_a_response_test() {
        let response = encode_a_response(&SAMPLE_QUERY, 300, Ipv4Addr::new(93, 184, 216, 34)).unwrap();

        // same as the sample response, plus AA
        let mut expected = SAMPLE_RESPONSE.to_vec();
        expected[2] |= 0x04;
        assert_eq!(&response[..], &expected[..]);
    }

    #[test]
    fn encode_a_response_rejects_truncated_query_test() {
        let addr = Ipv4Addr::LOCALHOST;

        assert_eq!(encode_a_response(&SAMPLE_QUERY[..8], 1, addr), Err(Error::ShortBuffer));
        assert_eq!(encode_a_response(&SAMPLE_QUERY[..30], 1, addr), Err(Error::ShortBuffer));
    }
}
