use rand::Rng;
use turnwire::{Error, Session, StartSchema, Strategy, TurnCounter};

// Picks uniformly from the announced [1, options] range, ignoring everything
// the other players have done.
pub struct RandomPick;

impl Strategy for RandomPick {
    fn start_schema(&self) -> StartSchema {
        StartSchema {
            keys: &["players", "seat", "options", "rounds"],
            seat: 1,
        }
    }

    fn decide(&self, session: &Session, _turn: &TurnCounter) -> Result<String, Error> {
        let Some(options) = session.get("options") else {
            return Err(Error::Domain("options parameter missing".to_owned()));
        };
        if options < 1 {
            return Err(Error::Domain(format!("nothing to pick from 1..={options}")));
        }
        let pick = rand::thread_rng().gen_range(1..=options);
        Ok(pick.to_string())
    }
}
