use std::io::{BufRead, Write};

use crate::command;
use crate::error::Error;
use crate::session::Session;
use crate::strategy::Strategy;
use crate::turn::TurnCounter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingStart,
    Ready,
    Terminated,
}

// The agent's half of the exchange: one command in, at most one line out,
// flushed before the next read. The engine blocks on each expected line, so
// an unflushed move stalls the whole match.
pub struct Harness<S, W> {
    strategy: S,
    out: W,
    session: Option<Session>,
    turn: TurnCounter,
    phase: Phase,
}

impl<S: Strategy, W: Write> Harness<S, W> {
    pub fn new(strategy: S, out: W) -> Self {
        Harness {
            strategy,
            out,
            session: None,
            turn: TurnCounter::new(),
            phase: Phase::AwaitingStart,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn turn(&self) -> &TurnCounter {
        &self.turn
    }

    // The engine waits for this line before sending the start command.
    pub fn greet(&mut self) -> Result<(), Error> {
        writeln!(self.out, "ready")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Phase, Error> {
        if self.phase == Phase::Terminated {
            return Ok(self.phase);
        }
        log::trace!("recv: {line}");
        let Some(cmd) = command::parse(line) else {
            self.phase = Phase::Terminated;
            return Ok(self.phase);
        };
        match cmd.name {
            "start" => {
                if self.session.is_some() {
                    return Err(Error::DuplicateStart);
                }
                let schema = self.strategy.start_schema();
                let session = Session::from_start(&schema, &cmd)?;
                log::debug!("session started, seat {}", session.seat());
                self.session = Some(session);
                self.phase = Phase::Ready;
            }
            "yourmove" => {
                if !cmd.args.is_empty() {
                    return Err(Error::BadArity {
                        cmd: "yourmove",
                        want: 0,
                        got: cmd.args.len(),
                    });
                }
                let Some(session) = &self.session else {
                    return Err(Error::MoveBeforeStart);
                };
                let mv = self.strategy.decide(session, &self.turn)?;
                writeln!(self.out, "{mv}")?;
                self.out.flush()?;
                self.turn.advance();
            }
            "move" => {
                let moves = cmd.int_args()?;
                self.strategy.observe(&moves);
            }
            "over" => {
                self.phase = Phase::Terminated;
            }
            other => return Err(Error::UnknownCommand(other.to_owned())),
        }
        Ok(self.phase)
    }

    // Reads until the engine says the game is over or closes the stream.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), Error> {
        self.greet()?;
        for line in input.lines() {
            if self.handle_line(&line?)? == Phase::Terminated {
                return Ok(());
            }
        }
        self.phase = Phase::Terminated;
        Ok(())
    }
}
