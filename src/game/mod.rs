//! Game state
//!
//! The session is the only stateful component; everything the presentation
//! layer shows is read back from it.

mod session;

pub use session::GameSession;
