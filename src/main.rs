//! chessbox - fixed-capacity piece boxes demo
//!
//! Loads a box configuration, builds a per-color pair, and runs a short
//! scripted session against both box backings.

mod config;

use anyhow::{bail, Context, Result};
use chessbox_core::ChessPiece;
use chessbox_store::{ChessBox, SlotChain, SlotItem};
use config::BoxConfig;
use std::{env, path::PathBuf};
use tracing::info;

struct CliOptions {
    config_path: Option<PathBuf>,
    capacity: Option<i64>,
}

impl CliOptions {
    fn parse<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut config_path = None;
        let mut capacity = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config_path = args.next().map(PathBuf::from),
                "--capacity" => {
                    let value = args.next().context("--capacity requires a value")?;
                    capacity = Some(
                        value
                            .parse()
                            .with_context(|| format!("invalid capacity {value:?}"))?,
                    );
                }
                other => bail!("unknown argument {other:?}"),
            }
        }
        Ok(Self {
            config_path,
            capacity,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting chessbox v{}", env!("CARGO_PKG_VERSION"));

    let opts = CliOptions::parse(env::args().skip(1))?;
    let mut cfg = match &opts.config_path {
        Some(path) => BoxConfig::load_from_path(path),
        None => BoxConfig::load(),
    };
    if let Some(capacity) = opts.capacity {
        cfg.capacity = capacity;
    }

    run_demo(&cfg);
    Ok(())
}

fn run_demo(cfg: &BoxConfig) {
    let capacity = cfg.effective_capacity();
    let mut boxes = ChessBox::with_colors(&cfg.p1_color, &cfg.p2_color, capacity);
    info!(
        capacity,
        p1 = %boxes.p1_color(),
        p2 = %boxes.p2_color(),
        "built box pair"
    );

    let roster = [
        ChessPiece::pawn(boxes.p1_color().as_str(), 1, 0, true, true),
        ChessPiece::pawn(boxes.p1_color().as_str(), 1, 1, true, true),
        ChessPiece::rook(boxes.p1_color().as_str(), 0, 0, true),
        ChessPiece::pawn(boxes.p2_color().as_str(), 6, 0, false, true),
        ChessPiece::rook(boxes.p2_color().as_str(), 7, 7, false),
    ];
    for piece in roster {
        let label = piece.to_string();
        let added = boxes.add_piece(piece);
        info!(added, "{label}");
    }

    info!(
        p1_pawns = boxes.p1_pieces().count("PAWN"),
        p1_size = boxes.p1_pieces().len(),
        p2_rooks = boxes.p2_pieces().count("ROOK"),
        p2_size = boxes.p2_pieces().len(),
        "after setup"
    );

    let p1 = boxes.p1_color().as_str().to_string();
    let removed = boxes.remove_piece("PAWN", &p1);
    info!(
        removed,
        remaining = boxes.p1_pieces().count("PAWN"),
        "removed one {p1} pawn"
    );

    // Same session against the chain backing.
    let mut chain: SlotChain<ChessPiece> = SlotChain::new(capacity);
    chain.add(ChessPiece::pawn("BLACK", 1, 0, true, true));
    chain.add(ChessPiece::rook("BLACK", 0, 0, true));
    chain.add(ChessPiece::pawn("BLACK", 1, 1, true, true));
    let order: Vec<&str> = chain.iter().map(|piece| piece.tag()).collect();
    info!(size = chain.len(), ?order, "chain backing, head first");
    chain.remove("PAWN");
    let order: Vec<&str> = chain.iter().map(|piece| piece.tag()).collect();
    info!(size = chain.len(), ?order, "after removing the head pawn");
}
