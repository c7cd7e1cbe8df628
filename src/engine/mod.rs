pub mod arena;
pub mod board;
pub mod error;
pub mod history;
pub mod opponent;
pub mod profiles;
pub mod rules;
pub mod scoreboard;
pub mod session;
