use crate::error::Error;
use crate::session::{Session, StartSchema};
use crate::turn::TurnCounter;

// The game-specific half of an agent. `decide` performs no I/O and sees the
// session read-only; the harness owns when a move goes out and when the turn
// counter advances.
pub trait Strategy {
    fn start_schema(&self) -> StartSchema;

    // Returns the full move line to send, without the trailing newline.
    // Session values outside the strategy's domain (an unexpected seat, an
    // empty choice range) are reported as Error::Domain, never papered over
    // with a guessed move.
    fn decide(&self, session: &Session, turn: &TurnCounter) -> Result<String, Error>;

    // Moves the engine broadcasts between turns. Most reference agents
    // don't track them.
    fn observe(&mut self, _moves: &[i64]) {}
}
