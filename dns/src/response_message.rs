use crate::header::{decode_header, Header};
use crate::question::{decode_question, Question};
use crate::resource_record::{decode_rr, ResourceRecord};
use crate::{Result, HEADER_SIZE};

/// A whole message: header, questions, and the three record sections.
///
/// Records borrow their RDATA from the packet, so the message cannot outlive it.
#[derive(Debug)]
pub struct ResponseMessage<'a> {
    header: Header,
    questions: Vec<Question>,
    answer_records: Vec<ResourceRecord<'a>>,
    authority_records: Vec<ResourceRecord<'a>>,
    additional_records: Vec<ResourceRecord<'a>>,
    wire_len: usize,
}

impl<'a> ResponseMessage<'a> {
    // 解析 DNS 消息，任一部分出错则整体失败
    pub fn parse_response(response: &'a [u8]) -> Result<Self> {
        let header = decode_header(response)?;
        tracing::debug!(
            "parsing message id: {:#06x}, qd: {}, an: {}, ns: {}, ar: {}",
            header.id(),
            header.qd_count(),
            header.answer_count(),
            header.authority_count(),
            header.additional_count()
        );

        let mut offset = HEADER_SIZE;

        let mut questions: Vec<Question> = Vec::new();
        for _ in 0..header.qd_count() {
            let (question, wire_len) = decode_question(response, offset)?;
            tracing::trace!("question at offset {}, {} bytes", offset, wire_len);
            offset += wire_len;
            questions.push(question);
        }

        let answer_records = parse_records(response, &mut offset, header.answer_count())?;
        let authority_records = parse_records(response, &mut offset, header.authority_count())?;
        let additional_records = parse_records(response, &mut offset, header.additional_count())?;

        if offset < response.len() {
            tracing::debug!("ignoring {} trailing bytes", response.len() - offset);
        }

        let msg = Self {
            header,
            questions,
            answer_records,
            authority_records,
            additional_records,
            wire_len: offset,
        };

        Ok(msg)
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[ResourceRecord<'a>] {
        &self.answer_records
    }

    pub fn authorities(&self) -> &[ResourceRecord<'a>] {
        &self.authority_records
    }

    pub fn additionals(&self) -> &[ResourceRecord<'a>] {
        &self.additional_records
    }

    /// Bytes of the packet covered by the message.
    pub fn wire_len(&self) -> usize {
        self.wire_len
    }
}

// Counts come off the wire, so nothing is preallocated from them.
fn parse_records<'a>(
    packet: &'a [u8],
    offset: &mut usize,
    count: u16,
) -> Result<Vec<ResourceRecord<'a>>> {
    let mut records = Vec::new();

    for _ in 0..count {
        let (record, wire_len) = decode_rr(packet, *offset)?;
        tracing::trace!("record at offset {}, {} bytes", offset, wire_len);
        *offset += wire_len;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{SAMPLE_QUERY, SAMPLE_RESPONSE};
    use crate::Error;
    use dns_types::RecordType;

    #[test]
    fn parse_query_test() {
        let msg = ResponseMessage::parse_response(&SAMPLE_QUERY).unwrap();

        assert_eq!(msg.header().id(), 0x1234);
        assert_eq!(msg.questions().len(), 1);
        assert_eq!(msg.questions()[0].name().to_dotted(), "www.example.com");
        assert!(msg.answers().is_empty());
        assert_eq!(msg.wire_len(), SAMPLE_QUERY.len());
    }

    #[test]
    fn parse_response_test() {
        let msg = ResponseMessage::parse_response(&SAMPLE_RESPONSE).unwrap();

        assert!(msg.header().is_response());
        assert_eq!(msg.answers().len(), 1);
        assert!(msg.authorities().is_empty());
        assert!(msg.additionals().is_empty());

        let answer = &msg.answers()[0];
        assert_eq!(answer.record_type(), RecordType::A);
        assert_eq!(answer.ttl(), 300);
        assert_eq!(answer.rdata(), &[93, 184, 216, 34]);
        assert_eq!(msg.wire_len(), SAMPLE_RESPONSE.len());
    }

    #[test]
    fn all_sections_test() {
        let mut packet = SAMPLE_RESPONSE.to_vec();
        // ns: 1, ar: 1
        packet[9] = 1;
        packet[11] = 1;
        // authority: example.com NS ns.example.com
        packet.extend_from_slice(&[0xC0, 16, 0, 2, 0, 1, 0, 0, 0x0E, 0x10, 0, 5, 2, b'n', b's', 0xC0, 16]);
        // additional: root OPT-like record with empty rdata
        packet.extend_from_slice(&[0, 0, 41, 0x10, 0, 0, 0, 0, 0, 0, 0]);

        let msg = ResponseMessage::parse_response(&packet).unwrap();

        assert_eq!(msg.authorities().len(), 1);
        assert_eq!(msg.authorities()[0].name().to_dotted(), "example.com");
        assert_eq!(msg.authorities()[0].record_type(), RecordType::Ns);
        assert_eq!(msg.authorities()[0].ttl(), 3600);
        assert_eq!(msg.additionals().len(), 1);
        assert_eq!(msg.additionals()[0].record_type(), RecordType::Opt);
        assert_eq!(msg.wire_len(), packet.len());
    }

    #[test]
    fn trailing_bytes_test() {
        let mut packet = SAMPLE_QUERY.to_vec();
        packet.extend_from_slice(&[0xDE, 0xAD]);

        let msg = ResponseMessage::parse_response(&packet).unwrap();

        assert_eq!(msg.wire_len(), SAMPLE_QUERY.len());
    }

    #[test]
    fn missing_record_test() {
        let mut packet = SAMPLE_RESPONSE.to_vec();
        // claims two answers, carries one
        packet[7] = 2;

        assert!(matches!(
            ResponseMessage::parse_response(&packet),
            Err(Error::ShortBuffer)
        ));
    }

    #[test]
    fn short_header_test() {
        assert!(matches!(
            ResponseMessage::parse_response(&SAMPLE_QUERY[..11]),
            Err(Error::ShortBuffer)
        ));
    }
}
