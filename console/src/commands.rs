use std::hint::black_box;
use std::net::Ipv4Addr;
use std::time::Instant;

use dns::samples::{SAMPLE_QUERY, SAMPLE_RESPONSE};
use dns::{Error, RecordType, HEADER_SIZE};
use log::{debug, info};

use crate::render::Printer;

type Check = fn() -> Result<(), String>;

const CHECKS: [(&str, Check); 7] = [
    ("Parse query header", check_query_header),
    ("Parse response header", check_response_header),
    ("Parse question section", check_question),
    ("Handle short packet", check_short_packet),
    ("Parse answer record", check_answer),
    ("Reject pointer loop", check_pointer_loop),
    ("Build A response", check_a_response),
];

/// Runs the self-checks and returns how many failed.
pub fn test(printer: &Printer) -> usize {
    printer.banner("DNS Codec Test Suite");

    let mut passed = 0;
    let mut failed = 0;
    for (i, (title, check)) in CHECKS.iter().enumerate() {
        print!("Test {}: {}... ", i + 1, title);
        match check() {
            Ok(()) => {
                println!("{}", printer.passed());
                passed += 1;
            }
            Err(detail) => {
                println!("{}", printer.failed(&detail));
                failed += 1;
            }
        }
    }

    println!("\nResults: {} passed, {} failed", passed, failed);
    failed
}

fn check_query_header() -> Result<(), String> {
    let h = dns::decode_header(&SAMPLE_QUERY).map_err(|e| e.to_string())?;
    if h.id() == 0x1234 && !h.is_response() && h.recursion_desired() && h.qd_count() == 1 {
        Ok(())
    } else {
        Err(format!("{:?}", h))
    }
}

fn check_response_header() -> Result<(), String> {
    let h = dns::decode_header(&SAMPLE_RESPONSE).map_err(|e| e.to_string())?;
    if h.id() == 0x1234 && h.is_response() && h.recursion_available() && h.answer_count() == 1 {
        Ok(())
    } else {
        Err(format!("{:?}", h))
    }
}

fn check_question() -> Result<(), String> {
    let (q, wire_len) = dns::decode_question(&SAMPLE_QUERY, HEADER_SIZE).map_err(|e| e.to_string())?;
    if q.record_type() == RecordType::A && q.qclass() == dns::CLASS_IN && wire_len == 21 {
        Ok(())
    } else {
        Err(format!("{:?}, wire_len={}", q, wire_len))
    }
}

fn check_short_packet() -> Result<(), String> {
    match dns::decode_header(&[0x12, 0x34]) {
        Err(Error::ShortBuffer) => Ok(()),
        other => Err(format!("expected ShortBuffer, got {:?}", other)),
    }
}

fn check_answer() -> Result<(), String> {
    let (rr, _) = dns::decode_rr(&SAMPLE_RESPONSE, SAMPLE_QUERY.len()).map_err(|e| e.to_string())?;
    if rr.ttl() == 300 && rr.rdata() == [0x5d, 0xb8, 0xd8, 0x22] {
        Ok(())
    } else {
        Err(format!("{:?}", rr))
    }
}

fn check_pointer_loop() -> Result<(), String> {
    // a name that points at itself
    let packet = [0x00, 0xC0, 0x01];
    match dns::decompress_name(&packet, 1) {
        Err(Error::InvalidPointer) => Ok(()),
        other => Err(format!("expected InvalidPointer, got {:?}", other)),
    }
}

fn check_a_response() -> Result<(), String> {
    let addr = Ipv4Addr::new(93, 184, 216, 34);
    let response = dns::builder::encode_a_response(&SAMPLE_QUERY, 300, addr).map_err(|e| e.to_string())?;

    let msg = dns::decode_response(&response).map_err(|e| e.to_string())?;
    match msg.answers().first() {
        Some(rr) if rr.rdata() == addr.octets() => Ok(()),
        other => Err(format!("unexpected answer {:?}", other)),
    }
}

struct Timing {
    ns_per_op: f64,
}

impl Timing {
    fn measure<F: FnMut()>(iterations: u64, mut f: F) -> Self {
        let start = Instant::now();
        for _ in 0..iterations {
            f();
        }
        let elapsed = start.elapsed();

        Self {
            ns_per_op: elapsed.as_nanos() as f64 / iterations.max(1) as f64,
        }
    }

    fn print(&self, unit: &str) {
        println!("  Time:     {:.2} ns/op", self.ns_per_op);
        if self.ns_per_op > 0.0 {
            println!("  Rate:     {:.2} M {}/sec", 1e3 / self.ns_per_op, unit);
        }
    }
}

pub fn bench(printer: &Printer, iterations: u64) {
    printer.banner("DNS Codec Benchmarks");
    info!("benchmarking with {} iterations", iterations);

    println!("Benchmark: Header parsing ({} iterations)...", iterations);
    Timing::measure(iterations, || {
        let _ = black_box(dns::decode_header(black_box(&SAMPLE_QUERY)));
    })
    .print("ops");

    println!("\nBenchmark: Question parsing ({} iterations)...", iterations);
    Timing::measure(iterations, || {
        let _ = black_box(dns::decode_question(black_box(&SAMPLE_QUERY), HEADER_SIZE));
    })
    .print("ops");

    println!("\nBenchmark: Full packet parse ({} iterations)...", iterations);
    Timing::measure(iterations, || {
        let _ = black_box(dns::decode_header(black_box(&SAMPLE_QUERY)));
        let _ = black_box(dns::decode_question(black_box(&SAMPLE_QUERY), HEADER_SIZE));
    })
    .print("packets");
}

pub fn parse(printer: &Printer, hex_text: &str) {
    match decode_hex(hex_text) {
        Ok(packet) => {
            debug!("parsing {} bytes", packet.len());
            println!("\nParsed packet:");
            printer.packet(&packet);
        }
        Err(e) => printer.error(&format!("invalid hex: {}", e)),
    }
}

pub fn sample(printer: &Printer) {
    println!("\nSample query packet:");
    printer.packet(&SAMPLE_QUERY);
}

pub fn response(printer: &Printer) {
    println!("\nSample response packet:");
    printer.packet(&SAMPLE_RESPONSE);
}

pub fn query(printer: &Printer, id: u16, domain: &str) {
    match dns::encode_request(id, domain, RecordType::A) {
        Ok(packet) => {
            println!("\nQuery for {}:", domain);
            printer.packet(&packet);
        }
        Err(e) => printer.error(&format!("cannot encode '{}': {}", domain, e)),
    }
}

/// Hex digits with any whitespace in between.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits)
}
