use crate::error::Error;

// One line of engine input: a command name followed by whitespace-separated
// arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

// A blank line is the engine hanging up, not a malformed command.
pub fn parse(line: &str) -> Option<Command<'_>> {
    let mut it = line.split_ascii_whitespace();
    let name = it.next()?;
    Some(Command {
        name,
        args: it.collect(),
    })
}

impl Command<'_> {
    pub fn int_args(&self) -> Result<Vec<i64>, Error> {
        self.args
            .iter()
            .map(|a| a.parse::<i64>().map_err(|_| Error::BadInt(a.to_string())))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn splits_name_and_args() {
        let cmd = parse("start 4 1 10 3").unwrap();
        assert_eq!(cmd.name, "start");
        assert_eq!(cmd.args, vec!["4", "1", "10", "3"]);
        assert_eq!(cmd.int_args().unwrap(), vec![4, 1, 10, 3]);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let cmd = parse("  yourmove \n").unwrap();
        assert_eq!(cmd.name, "yourmove");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \t "), None);
    }

    #[test]
    fn non_integer_argument_is_rejected() {
        let cmd = parse("start one").unwrap();
        assert!(matches!(cmd.int_args(), Err(Error::BadInt(t)) if t == "one"));
    }
}
