// https://datatracker.ietf.org/doc/html/rfc1035#section-4.1

pub mod builder;
pub mod compare;
mod error;
mod header;
mod name;
mod question;
mod request_message;
mod resource_record;
mod response_message;
pub mod samples;
pub mod utils;

pub use dns_types::{Class, Opcode, Rcode, RecordType};
pub use error::{Error, Result};
pub use header::{decode_header, encode_header, Header, FLAG_AA, FLAG_QR, FLAG_RA, FLAG_RD, FLAG_TC};
pub use name::{decompress_name, Name};
pub use question::{decode_question, Question};
pub use request_message::RequestMessage;
pub use resource_record::{decode_rr, ResourceRecord};
pub use response_message::ResponseMessage;

pub const HEADER_SIZE: usize = 12;

/// Longest name in wire form, root label included.
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_LABEL_LEN: usize = 63;

/// Compression pointers followed per name before giving up.
pub const MAX_POINTER_HOPS: usize = 127;

pub const MAX_PACKET_SIZE: usize = 65535;

pub const TYPE_A: u16 = 1;
pub const CLASS_IN: u16 = 1;

pub fn encode_request(id: u16, domain: &str, qtype: RecordType) -> Result<Vec<u8>> {
    let request_msg = RequestMessage::new(id, domain, qtype)?;
    let mut request_bytes: Vec<u8> = vec![];
    request_msg.to_bytes(&mut request_bytes);

    Ok(request_bytes)
}

pub fn decode_response(response_bytes: &[u8]) -> Result<ResponseMessage<'_>> {
    ResponseMessage::parse_response(response_bytes)
}
