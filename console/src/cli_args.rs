use std::path::PathBuf;
use argh::FromArgs;

fn default_config_path () -> PathBuf {
    PathBuf::from("./console_config.toml")
}

#[derive(Debug, FromArgs)]
#[argh(description = "inspect, self-test and benchmark the DNS wire codec; interactive without a command")]
pub struct CliArgs {
    #[argh(
        option,
        description = "config file path, default: './console_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Test(TestArgs),
    Bench(BenchArgs),
    Parse(ParseArgs),
    Sample(SampleArgs),
    Response(ResponseArgs),
    Query(QueryArgs),
}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "test", description = "run the built-in self-checks")]
pub struct TestArgs {}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "bench", description = "time header and question decoding")]
pub struct BenchArgs {
    #[argh(option, short = 'n', description = "iterations, default from config")]
    pub iterations: Option<u64>,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "parse", description = "decode a hex-encoded packet")]
pub struct ParseArgs {
    #[argh(positional, description = "packet bytes as hex, whitespace allowed")]
    pub hex: Vec<String>,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "sample", description = "decode the built-in query packet")]
pub struct SampleArgs {}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "response", description = "decode the built-in response packet")]
pub struct ResponseArgs {}

#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "query", description = "build an A query for a domain and decode it back")]
pub struct QueryArgs {
    #[argh(positional, description = "domain name, e.g. www.example.com")]
    pub domain: String,

    #[argh(option, default = "0x1234", description = "transaction id in decimal, default: 4660")]
    pub id: u16,
}
