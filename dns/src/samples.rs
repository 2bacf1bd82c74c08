//! Reference packets for `www.example.com A IN`.

/// Query, id 0x1234, RD set.
pub static SAMPLE_QUERY: [u8; 33] = [
    0x12, 0x34, // id
    0x01, 0x00, // flags: RD
    0x00, 0x01, // qdcount
    0x00, 0x00, // ancount
    0x00, 0x00, // nscount
    0x00, 0x00, // arcount
    0x03, b'w', b'w', b'w', //
    0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
    0x03, b'c', b'o', b'm', //
    0x00, // root
    0x00, 0x01, // qtype: A
    0x00, 0x01, // qclass: IN
];

/// Response to `SAMPLE_QUERY` with one answer, 93.184.216.34, TTL 300.
pub static SAMPLE_RESPONSE: [u8; 49] = [
    0x12, 0x34, // id
    0x81, 0x80, // flags: QR, RD, RA
    0x00, 0x01, // qdcount
    0x00, 0x01, // ancount
    0x00, 0x00, // nscount
    0x00, 0x00, // arcount
    0x03, b'w', b'w', b'w', //
    0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', //
    0x03, b'c', b'o', b'm', //
    0x00, // root
    0x00, 0x01, // qtype: A
    0x00, 0x01, // qclass: IN
    0xc0, 0x0c, // name: pointer to offset 12
    0x00, 0x01, // type: A
    0x00, 0x01, // class: IN
    0x00, 0x00, 0x01, 0x2c, // ttl: 300
    0x00, 0x04, // rdlength
    0x5d, 0xb8, 0xd8, 0x22, // rdata
];
