use turnwire::{Error, Session, StartSchema, Strategy, TurnCounter};

// Shuttles one piece between two fixed cells near its own corner. It will
// never finish a game, but it answers every move request on time, which is
// all a protocol reference needs to do.
pub struct BasicHalma;

impl Strategy for BasicHalma {
    fn start_schema(&self) -> StartSchema {
        StartSchema {
            keys: &["seat"],
            seat: 0,
        }
    }

    fn decide(&self, session: &Session, turn: &TurnCounter) -> Result<String, Error> {
        let odd_move = turn.current() % 2 == 0;
        let mv = match session.seat() {
            1 => {
                if odd_move {
                    "move 1 5 1 6"
                } else {
                    "move 1 6 1 5"
                }
            }
            2 => {
                if odd_move {
                    "move 16 12 16 11"
                } else {
                    "move 16 11 16 12"
                }
            }
            seat => {
                return Err(Error::Domain(format!("my seat is not 1 or 2 but {seat}")));
            }
        };
        Ok(mv.to_owned())
    }
}
