//! nxdomain command line tool
//!
//! Aggregates domain block lists into a BIND RPZ zone file or a dnsmasq
//! config snippet. Intended to be re-run periodically, e.g. from cron; each
//! run fully replaces the output file.

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;

use nxdomain::blocklist::dnsmasq::DnsmasqGenerator;
use nxdomain::blocklist::generate::{download_and_generate, Generator};
use nxdomain::blocklist::source::{ListSource, ListSyntax};
use nxdomain::blocklist::zone::BindGenerator;

/// nxdomain - domain block list management
#[derive(Parser)]
#[command(name = "nxdomain")]
#[command(version)]
#[command(about = "Aggregate domain block lists into a BIND RPZ zone or dnsmasq config")]
struct Cli {
    /// Output zone filename
    #[arg(long, value_name = "FILE")]
    out: PathBuf,

    /// Output format, BIND zone file or dnsmasq config
    #[arg(long, value_enum)]
    format: OutputFormat,

    /// Adds a simple block list URI (one domain per line); repeatable
    #[arg(long, value_name = "URI")]
    simple: Vec<String>,

    /// Adds a 'hosts' syntax block list URI; repeatable
    #[arg(long, value_name = "URI")]
    hosts: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy)]
enum OutputFormat {
    Bind,
    Dnsmasq,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .expect("Failed to initialize logger");

    let mut sources: Vec<ListSource> = Vec::new();
    sources.extend(
        cli.simple
            .iter()
            .map(|uri| ListSource::new(uri.clone(), ListSyntax::Simple)),
    );
    sources.extend(
        cli.hosts
            .iter()
            .map(|uri| ListSource::new(uri.clone(), ListSyntax::Hosts)),
    );

    if sources.is_empty() {
        Cli::command()
            .error(
                clap::error::ErrorKind::MissingRequiredArgument,
                "at least one --simple or --hosts is required",
            )
            .exit();
    }

    let generator: Box<dyn Generator> = match cli.format {
        OutputFormat::Bind => Box::new(BindGenerator),
        OutputFormat::Dnsmasq => Box::new(DnsmasqGenerator),
    };

    if let Err(e) = download_and_generate(&sources, generator.as_ref(), &cli.out) {
        log::error!("{}", e);
        process::exit(1);
    }
}
