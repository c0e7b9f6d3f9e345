//! Tic-tac-toe game-state and rule engine.
//!
//! This crate is the engine behind a 3x3 tic-tac-toe UI: it tracks board
//! state, validates moves, detects wins and draws, alternates turns
//! between a human and a randomly-moving computer opponent, and keeps a
//! running score across games. Presentation (rendering, click plumbing)
//! stays outside, behind the [`BoardRenderer`] and [`ScoreDisplay`]
//! collaborator traits.
//!
//! # Architecture
//!
//! - **Board and types**: [`Board`], [`Mark`], [`Square`], [`GameState`]
//! - **Rules**: pure win/draw evaluation in [`rules`], checking only the
//!   lines through the last move
//! - **Players**: [`Player`] with [`PlayerKind::Human`] or a random-policy
//!   computer opponent
//! - **Session**: [`GameSession`] coordinates turns, drives computer moves
//!   synchronously, records the [`ScoreBoard`], and notifies collaborators
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{
//!     Difficulty, GameSession, NullRenderer, NullScoreDisplay, PlayerKind,
//! };
//!
//! let mut session = GameSession::with_seed(
//!     PlayerKind::Human,
//!     PlayerKind::Computer { difficulty: Difficulty::Easy },
//!     Box::new(NullRenderer),
//!     Box::new(NullScoreDisplay),
//!     42,
//! );
//!
//! // Human X claims the center; the computer replies before this returns.
//! session.handle_move_request(1, 1)?;
//! assert_eq!(session.state().move_count(), 2);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod observer;
mod player;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use observer::{BoardRenderer, NullRenderer, NullScoreDisplay, ScoreDisplay};
pub use player::{Difficulty, Player, PlayerKind};
pub use position::Position;
pub use score::ScoreBoard;
pub use session::GameSession;
pub use types::{Board, GameState, GameStatus, Mark, Square};
