//! Resolution of spoken chess commands.
//!
//! A request such as "knight to f3", "takes" or "castle short" rarely names
//! an exact origin and destination. The parser turns its words into partial
//! square specifications, which are resolved against the position into legal
//! candidate moves. Moves that match but are not legal are kept as rejects
//! with the reasons they failed, so the explainer can say why nothing matched.
//! shakmaty is the rules engine; nothing here decides legality on its own.

pub mod board;
pub mod candidates;
pub mod castling;
pub mod command;
pub mod error;
pub mod explain;
pub mod feasibility;
pub mod game;
pub mod parser;
pub mod squares;

pub use candidates::{MoveCommand, RejectedMove};
pub use castling::{CastleCommand, RejectedCastle};
pub use command::{BoardCommand, Candidate, Outcome, ResolveCommand};
pub use error::{GameError, ParseError};
pub use game::Game;
pub use parser::{parse_request, Request};
pub use squares::SquareSpec;
