use crate::header::Header;
use crate::question::Question;
use crate::Result;
use bytes::BufMut;
use dns_types::RecordType;

pub struct RequestMessage {
    header: Header,
    question: Question,
}

impl RequestMessage {
    pub fn new(id: u16, domain: &str, qtype: RecordType) -> Result<Self> {
        let header = Header::query(id);
        let question = Question::new(domain, qtype)?;

        Ok(Self { header, question })
    }

    pub fn to_bytes<B: BufMut>(&self, bytes: &mut B) {
        bytes.put_slice(&self.header.to_bytes());
        self.question.to_bytes(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SAMPLE_QUERY;
    use crate::Error;

    #[test]
    fn to_bytes_test() {
        let mut bytes: Vec<u8> = vec![];

        let msg = RequestMessage::new(209 * 256 + 183, "baidu.com", RecordType::A).unwrap();
        msg.to_bytes(&mut bytes);

        let expected = [
            209, 183, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, // header
            5, 98, 97, 105, 100, 117, 3, 99, 111, 109, 0, 0, 1, 0, 1, // question
        ];

        assert_eq!(bytes, expected);
    }

    #[test]
    fn sample_query_test() {
        let mut bytes: Vec<u8> = vec![];

        let msg = RequestMessage::new(0x1234, "www.example.com", RecordType::A).unwrap();
        msg.to_bytes(&mut bytes);

        assert_eq!(&bytes[..], &SAMPLE_QUERY[..]);
    }

    #[test]
    fn invalid_domain_test() {
        let long_label = "x".repeat(64);

        assert!(matches!(
            RequestMessage::new(1, &long_label, RecordType::A),
            Err(Error::InvalidName)
        ));
    }
}
