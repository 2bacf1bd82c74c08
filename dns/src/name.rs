use crate::utils::{domain_to_name, name_to_dotted};
use crate::{Error, Result, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
use byteorder::{ByteOrder, BE};
use std::fmt;

// 11xxxxxx xxxxxxxx
const POINTER_TAG: u8 = 0xC0;
const POINTER_OFFSET_MASK: u16 = 0x3FFF;

/// A domain name in uncompressed wire form: length-prefixed labels followed by
/// the zero-length root label.
///
/// The bytes are owned, never borrowed from the packet they were decoded from,
/// and never exceed `MAX_NAME_LEN`.
#[derive(Clone)]
pub struct Name {
    buf: [u8; MAX_NAME_LEN],
    len: usize,
}

impl Name {
    pub fn root() -> Self {
        Self {
            buf: [0; MAX_NAME_LEN],
            len: 1,
        }
    }

    /// Encodes dotted text such as `www.example.com` into an uncompressed name.
    pub fn from_domain(domain: &str) -> Result<Self> {
        let wire = domain_to_name(domain)?;

        let mut name = Self {
            buf: [0; MAX_NAME_LEN],
            len: wire.len(),
        };
        name.buf[..wire.len()].copy_from_slice(&wire);

        Ok(name)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Length of the uncompressed wire form, root label included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_root(&self) -> bool {
        self.len == 1
    }

    pub fn to_dotted(&self) -> String {
        name_to_dotted(self.as_bytes())
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Name {}

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({:?})", self.to_dotted())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_dotted())
    }
}

/// Decompresses the name starting at `offset` in `packet`.
///
/// Returns the name together with the number of bytes its (possibly
/// compressed) encoding occupies at `offset`. Only the bytes up to and
/// including the first compression pointer count towards that length; bytes
/// reached by following pointers belong to earlier parts of the packet.
///
/// Pointers must target an offset strictly before their own position, which
/// rules out cycles. At most `MAX_POINTER_HOPS` pointers are followed.
pub fn decompress_name(packet: &[u8], offset: usize) -> Result<(Name, usize)> {
    let mut name = Name {
        buf: [0; MAX_NAME_LEN],
        len: 0,
    };
    let mut pos = offset;
    let mut wire_len = 0;
    let mut counting_wire = true;
    let mut hops = 0;

    loop {
        let label_len = *packet.get(pos).ok_or(Error::ShortBuffer)?;

        if label_len & POINTER_TAG == POINTER_TAG {
            let pointer = packet.get(pos..pos + 2).ok_or(Error::ShortBuffer)?;
            let target = usize::from(BE::read_u16(pointer) & POINTER_OFFSET_MASK);

            if counting_wire {
                wire_len += 2;
                counting_wire = false;
            }

            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(Error::CompressionLoop);
            }

            if target >= pos {
                return Err(Error::InvalidPointer);
            }

            pos = target;
            continue;
        }

        if label_len == 0 {
            if name.len + 1 > MAX_NAME_LEN {
                return Err(Error::Overflow);
            }
            name.buf[name.len] = 0;
            name.len += 1;

            if counting_wire {
                wire_len += 1;
            }

            return Ok((name, wire_len));
        }

        let label_len = usize::from(label_len);
        if label_len > MAX_LABEL_LEN {
            return Err(Error::InvalidName);
        }

        let label_begin = pos + 1;
        let label_end = label_begin + label_len;
        let label = packet
            .get(label_begin..label_end)
            .ok_or(Error::ShortBuffer)?;

        if name.len + 1 + label_len > MAX_NAME_LEN {
            return Err(Error::Overflow);
        }

        name.buf[name.len] = label_len as u8;
        name.buf[name.len + 1..name.len + 1 + label_len].copy_from_slice(label);
        name.len += 1 + label_len;

        if counting_wire {
            wire_len += 1 + label_len;
        }

        pos = label_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{SAMPLE_QUERY, SAMPLE_RESPONSE};

    const WWW_EXAMPLE_COM: [u8; 17] = [
        3, b'w', b'w', b'w', 7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
    ];

    // A root name at offset 0 followed by `n` pointers, each one pointing at
    // the one before it. Returns the packet and the offset of the last pointer.
    fn pointer_chain(n: usize) -> (Vec<u8>, usize) {
        let mut packet = vec![0u8];
        let mut target = 0;

        for _ in 0..n {
            let pos = packet.len();
            packet.push(POINTER_TAG | (target >> 8) as u8);
            packet.push(target as u8);
            target = pos;
        }

        (packet, target)
    }

    fn label(len: usize) -> Vec<u8> {
        let mut bytes = vec![len as u8];
        bytes.resize(1 + len, b'a');
        bytes
    }

    #[test]
    fn uncompressed_name_test() {
        let (name, wire_len) = decompress_name(&SAMPLE_QUERY, 12).unwrap();

        assert_eq!(name.as_bytes(), &WWW_EXAMPLE_COM[..]);
        assert_eq!(name.len(), 17);
        assert_eq!(wire_len, 17);
        assert_eq!(name.to_dotted(), "www.example.com");
    }

    #[test]
    fn pointer_test() {
        // answer name at offset 33 is `c0 0c`
        let (name, wire_len) = decompress_name(&SAMPLE_RESPONSE, 33).unwrap();

        assert_eq!(name.as_bytes(), &WWW_EXAMPLE_COM[..]);
        assert_eq!(wire_len, 2);
    }

    #[test]
    fn label_then_pointer_test() {
        let mut packet = SAMPLE_QUERY.to_vec();
        let offset = packet.len();
        packet.extend_from_slice(&[3, b'f', b'o', b'o', 0xC0, 12]);

        let (name, wire_len) = decompress_name(&packet, offset).unwrap();

        assert_eq!(name.to_dotted(), "foo.www.example.com");
        assert_eq!(name.len(), 4 + 17);
        assert_eq!(wire_len, 6);
    }

    #[test]
    fn mid_name_pointer_counts_only_first_hop_test() {
        // 0: "com", 5: "example" -> 0, 15: "www" -> 5
        let packet = [
            3, b'c', b'o', b'm', 0, //
            7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0xC0, 0, //
            3, b'w', b'w', b'w', 0xC0, 5,
        ];

        let (name, wire_len) = decompress_name(&packet, 15).unwrap();

        assert_eq!(name.as_bytes(), &WWW_EXAMPLE_COM[..]);
        assert_eq!(wire_len, 6);
    }

    #[test]
    fn root_name_test() {
        let (name, wire_len) = decompress_name(&[0], 0).unwrap();

        assert!(name.is_root());
        assert_eq!(name.as_bytes(), &[0]);
        assert_eq!(wire_len, 1);
        assert_eq!(name.to_dotted(), ".");
    }

    #[test]
    fn pointer_chain_within_limit_test() {
        let (packet, start) = pointer_chain(MAX_POINTER_HOPS);

        let (name, wire_len) = decompress_name(&packet, start).unwrap();

        assert!(name.is_root());
        assert_eq!(wire_len, 2);
    }

    #[test]
    fn pointer_chain_over_limit_test() {
        let (packet, start) = pointer_chain(MAX_POINTER_HOPS + 1);

        assert_eq!(decompress_name(&packet, start), Err(Error::CompressionLoop));
    }

    #[test]
    fn pointer_to_itself_test() {
        let packet = [0, 0, 0xC0, 2];

        assert_eq!(decompress_name(&packet, 2), Err(Error::InvalidPointer));
    }

    #[test]
    fn forward_pointer_test() {
        let packet = [0xC0, 2, 0];

        assert_eq!(decompress_name(&packet, 0), Err(Error::InvalidPointer));
    }

    #[test]
    fn invalid_label_length_test() {
        let mut packet = label(64);
        packet.push(0);
        assert_eq!(decompress_name(&packet, 0), Err(Error::InvalidName));

        // 10xxxxxx is neither a label nor a pointer
        assert_eq!(decompress_name(&[0x80, 0], 0), Err(Error::InvalidName));
        assert_eq!(decompress_name(&[0x41, 0], 0), Err(Error::InvalidName));
    }

    #[test]
    fn short_buffer_test() {
        // offset past the end
        assert_eq!(decompress_name(&[0], 1), Err(Error::ShortBuffer));
        // truncated label
        assert_eq!(decompress_name(&[3, b'w', b'w'], 0), Err(Error::ShortBuffer));
        // missing root label
        assert_eq!(decompress_name(&[3, b'w', b'w', b'w'], 0), Err(Error::ShortBuffer));
        // pointer cut in half
        assert_eq!(decompress_name(&[0, 0xC0], 1), Err(Error::ShortBuffer));
    }

    #[test]
    fn overflow_test() {
        let mut packet = Vec::new();
        for _ in 0..4 {
            packet.extend_from_slice(&label(63));
        }
        packet.push(0);

        assert_eq!(decompress_name(&packet, 0), Err(Error::Overflow));
    }

    #[test]
    fn longest_name_test() {
        // 3 * 64 + 62 + 1 = 255
        let mut packet = Vec::new();
        for _ in 0..3 {
            packet.extend_from_slice(&label(63));
        }
        packet.extend_from_slice(&label(61));
        packet.push(0);

        let (name, wire_len) = decompress_name(&packet, 0).unwrap();
        assert_eq!(name.len(), MAX_NAME_LEN);
        assert_eq!(wire_len, MAX_NAME_LEN);

        // one more byte leaves no room for the root label
        let mut packet = Vec::new();
        for _ in 0..3 {
            packet.extend_from_slice(&label(63));
        }
        packet.extend_from_slice(&label(62));
        packet.push(0);

        assert_eq!(decompress_name(&packet, 0), Err(Error::Overflow));
    }

    #[test]
    fn from_domain_test() {
        let name = Name::from_domain("www.example.com").unwrap();
        assert_eq!(name.as_bytes(), &WWW_EXAMPLE_COM[..]);
        assert_eq!(name.to_string(), "www.example.com");

        assert_eq!(Name::from_domain("."), Ok(Name::root()));
        assert_eq!(Name::from_domain("a..b"), Err(Error::InvalidName));
    }
}
