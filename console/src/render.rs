use std::convert::TryFrom;
use std::net::Ipv4Addr;

use dns::{Header, Question, RecordType, ResourceRecord};
use log::warn;

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";

const RULE: &str = "═══════════════════════════════════════════════════════════";
const THIN_RULE: &str = "───────────────────────────────────────────────────────────";

pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn paint(&self, code: &str, s: &str) -> String {
        if self.color {
            format!("{}{}{}", code, s, RESET)
        } else {
            s.to_string()
        }
    }

    pub fn passed(&self) -> String {
        self.paint(GREEN, "PASSED")
    }

    pub fn failed(&self, detail: &str) -> String {
        self.paint(RED, &format!("FAILED ({})", detail))
    }

    pub fn error(&self, msg: &str) {
        println!("{}", self.paint(RED, &format!("Error: {}", msg)));
    }

    pub fn banner(&self, title: &str) {
        println!("{}", self.paint(BOLD, &format!("\n{}\n{:^59}\n{}\n", RULE, title, RULE)));
    }

    fn section(&self, title: &str, rule: &str) {
        println!("{}", self.paint(CYAN, rule));
        println!("{}", self.paint(BOLD, title));
        println!("{}", self.paint(CYAN, rule));
    }

    pub fn hexdump(&self, data: &[u8]) {
        for line in hexdump_lines(data) {
            println!("{}", line);
        }
    }

    pub fn header(&self, h: &Header) {
        self.section("DNS Header", RULE);
        println!("  ID:       {:#06x} ({})", h.id(), h.id());
        println!("  Flags:    {:#06x}", h.flags());
        println!(
            "    QR:     {} ({})",
            h.is_response() as u8,
            if h.is_response() { "Response" } else { "Query" }
        );
        println!("    OPCODE: {}", h.opcode());
        println!("    AA:     {}", h.is_authoritative() as u8);
        println!("    TC:     {}", h.is_truncated() as u8);
        println!("    RD:     {}", h.recursion_desired() as u8);
        println!("    RA:     {}", h.recursion_available() as u8);
        println!("    RCODE:  {}", h.rcode());
        println!("  QDCOUNT:  {}", h.qd_count());
        println!("  ANCOUNT:  {}", h.answer_count());
        println!("  NSCOUNT:  {}", h.authority_count());
        println!("  ARCOUNT:  {}", h.additional_count());
    }

    pub fn question(&self, q: &Question) {
        self.section("Question Section", THIN_RULE);
        println!("  Name:     {}", q.name());
        println!("  Type:     {} ({})", q.qtype(), q.record_type());
        println!("  Class:    {} ({})", q.qclass(), q.class());
        println!("  Wire len: {} bytes", q.wire_len());
    }

    pub fn record(&self, section: &str, rr: &ResourceRecord<'_>) {
        self.section(&format!("{} Record", section), THIN_RULE);
        println!("  Name:     {}", rr.name());
        println!("  Type:     {} ({})", rr.rtype(), rr.record_type());
        println!("  Class:    {} ({})", rr.rclass(), rr.class());
        println!("  TTL:      {}", rr.ttl());
        println!("  RDLENGTH: {}", rr.rdlength());
        println!("  RDATA:    {}", rdata_text(rr));
        println!("  Wire len: {} bytes", rr.wire_len());
    }

    /// Hexdumps `packet` and walks every section, stopping at the first error.
    pub fn packet(&self, packet: &[u8]) {
        self.hexdump(packet);

        let header = match dns::decode_header(packet) {
            Ok(h) => h,
            Err(e) => {
                warn!("header decode failed: {}", e);
                self.error(&format!("header: {}", e));
                return;
            }
        };
        self.header(&header);

        let mut offset = dns::HEADER_SIZE;
        for i in 0..header.qd_count() {
            match dns::decode_question(packet, offset) {
                Ok((q, wire_len)) => {
                    self.question(&q);
                    offset += wire_len;
                }
                Err(e) => {
                    warn!("question {} at offset {} failed: {}", i, offset, e);
                    self.error(&format!("question {} at offset {}: {}", i, offset, e));
                    return;
                }
            }
        }

        let sections = [
            ("Answer", header.answer_count()),
            ("Authority", header.authority_count()),
            ("Additional", header.additional_count()),
        ];
        for (section, count) in sections.iter() {
            for i in 0..*count {
                match dns::decode_rr(packet, offset) {
                    Ok((rr, wire_len)) => {
                        self.record(section, &rr);
                        offset += wire_len;
                    }
                    Err(e) => {
                        warn!("{} record {} at offset {} failed: {}", section, i, offset, e);
                        self.error(&format!("{} record {} at offset {}: {}", section, i, offset, e));
                        return;
                    }
                }
            }
        }
    }
}

pub fn hexdump_lines(data: &[u8]) -> Vec<String> {
    data.chunks(16)
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn rdata_text(rr: &ResourceRecord<'_>) -> String {
    let raw = hex::encode(rr.rdata());

    if rr.record_type() == RecordType::A {
        if let Ok(octets) = <[u8; 4]>::try_from(rr.rdata()) {
            return format!("{} ({})", raw, Ipv4Addr::from(octets));
        }
    }

    raw
}
