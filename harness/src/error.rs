// A desynchronized command stream cannot be repaired, so every error here is
// terminal: the agent reports it and exits non-zero for the engine to observe.
#[derive(Debug)]
pub enum Error {
    UnknownCommand(String),
    BadArity {
        cmd: &'static str,
        want: usize,
        got: usize,
    },
    BadInt(String),
    MoveBeforeStart,
    DuplicateStart,
    Domain(String),
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownCommand(cmd) => write!(f, "unknown command {cmd:?}"),
            Error::BadArity { cmd, want, got } => {
                write!(f, "{cmd} takes {want} arguments, got {got}")
            }
            Error::BadInt(token) => write!(f, "expected an integer, got {token:?}"),
            Error::MoveBeforeStart => write!(f, "move requested before start"),
            Error::DuplicateStart => write!(f, "start received twice"),
            Error::Domain(msg) => write!(f, "{msg}"),
            Error::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error {
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            Error::UnknownCommand(_)
                | Error::BadArity { .. }
                | Error::BadInt(_)
                | Error::MoveBeforeStart
                | Error::DuplicateStart
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn protocol_violations_are_distinguishable_from_domain_failures() {
        assert!(Error::MoveBeforeStart.is_protocol());
        assert!(Error::BadInt("x".to_owned()).is_protocol());
        assert!(!Error::Domain("seat 3".to_owned()).is_protocol());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        assert!(!Error::Io(io).is_protocol());
    }

    #[test]
    fn messages_name_the_offending_input() {
        let e = Error::UnknownCommand("frobnicate".to_owned());
        assert_eq!(e.to_string(), "unknown command \"frobnicate\"");
        let e = Error::BadArity {
            cmd: "start",
            want: 4,
            got: 2,
        };
        assert_eq!(e.to_string(), "start takes 4 arguments, got 2");
    }
}
