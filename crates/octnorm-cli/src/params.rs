//! Command-line parameter parsing for the decoder.

use std::fmt;
use std::str::FromStr;

use clap::{CommandFactory, Parser, ValueEnum, error::ErrorKind};
use octnorm_decode::{DecodeResult, OctDecoder, RangeMax, RangePolicy};

/// A quantized oct coordinate pair as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctPair {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for OctPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Parse an `X,Y` string into an [`OctPair`].
fn parse_pair(s: &str) -> Result<OctPair, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;

    let x = u32::from_str(x.trim()).map_err(|e| format!("invalid x coordinate: {e}"))?;
    let y = u32::from_str(y.trim()).map_err(|e| format!("invalid y coordinate: {e}"))?;

    Ok(OctPair { x, y })
}

/// Range policy as selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    /// Reject coordinates outside the range.
    #[default]
    Strict,
    /// Clamp coordinates into the range.
    Clamp,
}

impl From<PolicyArg> for RangePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => RangePolicy::Strict,
            PolicyArg::Clamp => RangePolicy::Clamp,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Decode oct-encoded unit vectors into normalized directions")]
struct CliArgs {
    /// Bits per coordinate; the range maximum is 2^bits - 1.
    #[arg(long, conflicts_with = "range_max")]
    bits: Option<u32>,

    /// Maximum quantized value (defaults to 255).
    #[arg(long)]
    range_max: Option<u32>,

    /// How to treat coordinates outside the range.
    #[arg(long, value_enum, default_value_t = PolicyArg::default())]
    policy: PolicyArg,

    /// Coordinate pairs to decode, as X,Y.
    #[arg(required = true, value_parser = parse_pair)]
    pairs: Vec<OctPair>,
}

/// Resolved decoder parameters.
#[derive(Debug)]
pub struct DecodeParams {
    /// Decoder configured from `--bits`/`--range-max` and `--policy`.
    pub decoder: OctDecoder,
    /// Pairs to decode, in command-line order.
    pub pairs: Vec<OctPair>,
}

impl CliArgs {
    fn resolve(self) -> DecodeResult<DecodeParams> {
        let range_max = match self.bits {
            Some(bits) => RangeMax::from_bits(bits)?,
            None => RangeMax::resolve(self.range_max)?,
        };

        Ok(DecodeParams {
            decoder: OctDecoder::new(range_max, self.policy.into()),
            pairs: self.pairs,
        })
    }
}

/// Parse decoder parameters from the process arguments.
///
/// Exits with a usage error if the range configuration is invalid.
pub fn parse() -> DecodeParams {
    match CliArgs::parse().resolve() {
        Ok(params) => params,
        Err(e) => CliArgs::command()
            .error(ErrorKind::InvalidValue, e.to_string())
            .exit(),
    }
}
