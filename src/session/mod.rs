//! Game session orchestration

mod game;

pub use game::GameSession;
