//! NxN tic-tac-toe game-state engine.
//!
//! The engine owns the board, move validation, win/draw detection, the undo
//! stack, and the turn-sequencing state machine, plus the opponent strategies
//! a front end delegates to on the computer's turn. Rendering, animation, and
//! input dispatch belong to the presentation layer, which drives the engine
//! through [`engine::session::GameSession`].

pub mod engine;
