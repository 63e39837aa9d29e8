//! Settings of the batch converter.
use std::path::PathBuf;

use clap::{Parser, builder::RangedU64ValueParser};

use crate::amount::{BareMinorUnit, FormatOptions, ParseOptions};

/// Default capacity of the conversion request channel.
pub const CHANNEL_SIZE: usize = 100;

/// Converts amounts, capitalized numerals and dates listed in a CSV file
#[derive(Parser, Debug)]
#[command(name = "daxie")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch conversion of capitalized Chinese amounts", long_about = None)]
pub struct Cli {
    /// CSV file with `type,row,input` columns
    input: PathBuf,

    /// Read a 角 or 分 that follows no digit as nothing
    #[arg(long)]
    strict: bool,

    /// Omit the 零 before the fen term when there are no jiao
    #[arg(long)]
    no_fen_bridge: bool,

    /// Capacity of the request channel
    #[arg(
        long,
        default_value_t = CHANNEL_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    channel_size: usize,
}

/// Batch converter settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// CSV file with one conversion request per row.
    pub input: PathBuf,
    /// Capacity of the request channel between the reader and the converter.
    pub channel_size: usize,
    pub parse: ParseOptions,
    pub format: FormatOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::new(),
            channel_size: CHANNEL_SIZE,
            parse: ParseOptions::default(),
            format: FormatOptions::default(),
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        let bare_minor_unit = if cli.strict {
            BareMinorUnit::Ignore
        } else {
            BareMinorUnit::ImpliedOne
        };
        Settings {
            input: cli.input,
            channel_size: cli.channel_size,
            parse: ParseOptions { bare_minor_unit },
            format: FormatOptions {
                fen_bridge: !cli.no_fen_bridge,
            },
        }
    }
}
