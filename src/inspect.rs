//! Command-line driven inspection of the codecs.
//!
//! ```text
//! clockwork [startpos | fen <fields>] [moves <uci>...] [decode <index>...]
//! ```

use anyhow::{Context, Result, bail};
use clockwork_codec::{
    CASTLING_PLANE, CodecError, EN_PASSANT_PLANE, HALFMOVE_PLANE, MoveIndex, MoveTable,
    Representation, SIDE_TO_MOVE_PLANE, encode,
};
use clockwork_core::{Board, Move, Square};
use tracing::{info, warn};

/// What to set up and what to look up.
#[derive(Debug, Clone, Default)]
pub struct InspectConfig {
    /// Position before any moves are played.
    pub board: Board,
    /// Moves to index, each played on the board after lookup.
    pub moves: Vec<Move>,
    /// Raw policy indices to decode.
    pub decode: Vec<usize>,
}

impl InspectConfig {
    /// Parse command-line arguments (program name excluded).
    ///
    /// An empty argument list yields the default: starting position, nothing
    /// to look up.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<InspectConfig> {
        let tokens: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let mut config = InspectConfig::default();

        let mut rest = match tokens.first() {
            None => return Ok(config),
            Some(&"startpos") => &tokens[1..],
            Some(&"fen") => {
                let end = tokens[1..]
                    .iter()
                    .position(|t| is_section(t))
                    .map_or(tokens.len(), |i| i + 1);
                let fen = tokens[1..end].join(" ");
                config.board = fen.parse().with_context(|| format!("invalid FEN: {fen}"))?;
                &tokens[end..]
            }
            Some(_) => &tokens[..],
        };

        while let Some((&section, tail)) = rest.split_first() {
            let end = tail.iter().position(|t| is_section(t)).unwrap_or(tail.len());
            let (items, next) = tail.split_at(end);
            match section {
                "moves" => {
                    for text in items {
                        let mv = Move::from_uci(text)
                            .with_context(|| format!("invalid move: {text}"))?;
                        config.moves.push(mv);
                    }
                }
                "decode" => {
                    for text in items {
                        let index = text
                            .parse()
                            .with_context(|| format!("invalid policy index: {text}"))?;
                        config.decode.push(index);
                    }
                }
                other => bail!("unexpected argument: {other}"),
            }
            rest = next;
        }

        Ok(config)
    }
}

fn is_section(token: &str) -> bool {
    matches!(token, "moves" | "decode")
}

/// Results of one inspection run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Each requested move with its index in the position it was played from.
    pub indexed: Vec<(Move, Option<MoveIndex>)>,
    /// Each requested raw index with its decoded move.
    pub decoded: Vec<(usize, Result<Move, CodecError>)>,
    /// Position after all moves.
    pub board: Board,
    /// Encoding of the final position.
    pub representation: Representation,
}

/// Play the configured moves, indexing each, then encode the result.
pub fn run(config: &InspectConfig) -> Report {
    let table = MoveTable::global();

    let mut board = config.board;
    let mut indexed = Vec::with_capacity(config.moves.len());
    for &mv in &config.moves {
        indexed.push((mv, table.to_index(mv)));
        board = board.play(mv);
    }

    let decoded = config
        .decode
        .iter()
        .map(|&raw| (raw, table.require_move(raw)))
        .collect();

    Report {
        indexed,
        decoded,
        board,
        representation: encode(&board),
    }
}

/// Log a report through `tracing`.
pub fn log_report(report: &Report) {
    for (mv, index) in &report.indexed {
        match index {
            Some(index) => info!(%mv, %index, plane = index.plane(), "move index"),
            None => warn!(%mv, "move has no policy index"),
        }
    }

    for (raw, result) in &report.decoded {
        match result {
            Ok(mv) => info!(index = raw, %mv, "decoded index"),
            Err(e) => warn!(index = raw, error = %e, "cannot decode index"),
        }
    }

    let rep = &report.representation;
    let pieces = rep.as_slice()[..SIDE_TO_MOVE_PLANE * Square::COUNT]
        .iter()
        .filter(|&&c| c != 0.0)
        .count();
    let castling: String = (0..4)
        .map(|i| if rep.plane(CASTLING_PLANE + i)[0] == 1.0 { '1' } else { '0' })
        .collect();
    let en_passant = rep
        .plane(EN_PASSANT_PLANE)
        .iter()
        .position(|&c| c == 1.0)
        .and_then(|i| Square::from_index(i as u8));

    info!(
        fen = %report.board,
        occupied = report.board.occupied().count(),
        "final position\n{}",
        report.board.pretty()
    );
    info!(
        pieces,
        white_to_move = rep.plane(SIDE_TO_MOVE_PLANE)[0] == 1.0,
        castling = %castling,
        en_passant = ?en_passant,
        halfmove = rep.plane(HALFMOVE_PLANE)[0],
        "encoding summary"
    );
}
