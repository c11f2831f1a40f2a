use crate::command::Command;
use crate::error::Error;

// Shape of the start command for one game: one key per integer argument,
// with `seat` indexing the argument that names this agent.
#[derive(Clone, Copy, Debug)]
pub struct StartSchema {
    pub keys: &'static [&'static str],
    pub seat: usize,
}

// Parameters the engine announced at game start. Built once by `from_start`
// and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    keys: &'static [&'static str],
    values: Vec<i64>,
    seat: i64,
}

impl Session {
    pub fn from_start(schema: &StartSchema, cmd: &Command<'_>) -> Result<Self, Error> {
        if cmd.args.len() != schema.keys.len() {
            return Err(Error::BadArity {
                cmd: "start",
                want: schema.keys.len(),
                got: cmd.args.len(),
            });
        }
        let values = cmd.int_args()?;
        let seat = values[schema.seat];
        Ok(Session {
            keys: schema.keys,
            values,
            seat,
        })
    }

    pub fn seat(&self) -> i64 {
        self.seat
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        let i = self.keys.iter().position(|k| *k == key)?;
        Some(self.values[i])
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::command;

    const SCHEMA: StartSchema = StartSchema {
        keys: &["players", "seat", "options", "rounds"],
        seat: 1,
    };

    #[test]
    fn stores_exactly_the_parsed_arguments() {
        let cmd = command::parse("start 4 1 10 3").unwrap();
        let session = Session::from_start(&SCHEMA, &cmd).unwrap();
        assert_eq!(session.values(), &[4, 1, 10, 3]);
        assert_eq!(session.seat(), 1);
        assert_eq!(session.get("players"), Some(4));
        assert_eq!(session.get("options"), Some(10));
        assert_eq!(session.get("rounds"), Some(3));
        assert_eq!(session.get("nonsense"), None);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let cmd = command::parse("start 4 1").unwrap();
        assert!(matches!(
            Session::from_start(&SCHEMA, &cmd),
            Err(Error::BadArity { want: 4, got: 2, .. })
        ));
    }

    #[test]
    fn non_integer_parameter_is_rejected() {
        let cmd = command::parse("start 4 x 10 3").unwrap();
        assert!(matches!(
            Session::from_start(&SCHEMA, &cmd),
            Err(Error::BadInt(_))
        ));
    }
}
