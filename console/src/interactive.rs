use std::io::{self, BufRead, Write};

use configuration::ConsoleConfiguration;
use log::debug;

use crate::commands;
use crate::render::Printer;

const HELP: &str = "\
Commands:
  parse <hex>     - Parse hex-encoded DNS packet
  sample          - Parse sample query packet
  response        - Parse sample response packet
  query <domain>  - Build and parse an A query
  test            - Run test suite
  bench           - Run benchmarks
  help            - Show this help
  quit            - Exit";

#[derive(Debug, Eq, PartialEq)]
enum Line<'a> {
    Parse(&'a str),
    Sample,
    Response,
    Query(&'a str),
    Test,
    Bench,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    let line = line.trim();
    let (command, rest) = match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim()),
        None => (line, ""),
    };

    match command {
        "" => Line::Empty,
        "parse" if !rest.is_empty() => Line::Parse(rest),
        "query" if !rest.is_empty() => Line::Query(rest),
        "sample" => Line::Sample,
        "response" => Line::Response,
        "test" => Line::Test,
        "bench" => Line::Bench,
        "help" => Line::Help,
        "quit" | "exit" => Line::Quit,
        _ => Line::Unknown(line),
    }
}

pub fn run(printer: &Printer, config: &ConsoleConfiguration) -> io::Result<()> {
    printer.banner("DNS Codec Console - Interactive Mode");
    println!("{}\n", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", printer.paint("\x1b[32m", "dns> "));
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let command = parse_line(&line);
        debug!("interactive command: {:?}", command);
        match command {
            Line::Parse(hex) => commands::parse(printer, hex),
            Line::Sample => commands::sample(printer),
            Line::Response => commands::response(printer),
            Line::Query(domain) => commands::query(printer, 0x1234, domain),
            Line::Test => {
                commands::test(printer);
            }
            Line::Bench => commands::bench(printer, config.bench.iterations),
            Line::Help => println!("{}", HELP),
            Line::Quit => {
                println!("Goodbye!");
                break;
            }
            Line::Empty => {}
            Line::Unknown(text) => println!("Unknown command: {}", text),
        }
    }

    Ok(())
}
