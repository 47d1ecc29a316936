//! Command-line decoder for oct-encoded unit vectors.
//!
//! Prints one JSON object per `X,Y` argument:
//!
//! ```text
//! $ octnorm --bits 8 0,0 300,0
//! {"x":0,"y":0,"normal":[-0.0,-0.0,-1.0]}
//! {"x":300,"y":0,"error":"oct coordinates (300, 0) must be unsigned ..."}
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

mod params;

use std::process::ExitCode;

use octnorm_decode::DecodeResult;
use serde::Serialize;

use crate::params::OctPair;

/// One decoded pair, as written to stdout.
#[derive(Debug, Serialize)]
struct DecodedRecord {
    x: u32,
    y: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    normal: Option<[f64; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl DecodedRecord {
    fn new(pair: OctPair, result: DecodeResult<[f64; 3]>) -> Self {
        match result {
            Ok(normal) => Self {
                x: pair.x,
                y: pair.y,
                normal: Some(normal),
                error: None,
            },
            Err(e) => Self {
                x: pair.x,
                y: pair.y,
                normal: None,
                error: Some(e.to_string()),
            },
        }
    }
}

fn main() -> ExitCode {
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let params = params::parse();
    let decoder = params.decoder;

    tracing::info!(
        range_max = %decoder.range_max(),
        policy = ?decoder.policy(),
        count = params.pairs.len(),
        "Decoding oct pairs"
    );

    let mut failed = 0usize;

    for &pair in &params.pairs {
        let result = decoder.decode(pair.x, pair.y).map(|v| v.to_array());
        if let Err(e) = &result {
            tracing::warn!("Failed to decode {}: {}", pair, e);
            failed += 1;
        }

        match serde_json::to_string(&DecodedRecord::new(pair, result)) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::error!("Failed to serialize {}: {}", pair, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        tracing::info!(failed, "Some pairs could not be decoded");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
