use std::{
    fmt::Display,
    io::{self, Stdout, Write},
};

const RULE_WIDTH: usize = 50;
const SERVER_HINT: &str = "Make sure your server is running with 'npm start'";

/// Operator-facing console output: banner lines, progress dots and the final summary.
pub struct Report<W: Write> {
    out: W,
}

impl Report<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
        }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn dot(&mut self) -> io::Result<()> {
        write!(self.out, ".")?;
        self.out.flush()
    }

    /// Closes a row of dots with a check mark line.
    pub fn done(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "\n✓ {}\n", text)
    }

    pub fn connected(&mut self) -> io::Result<()> {
        writeln!(self.out, "✓ Connected to API successfully\n")
    }

    /// Per-item failure, printed on its own line so the dots resume below it.
    pub fn failure(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "\n{}", text)?;
        self.out.flush()
    }

    pub fn summary(&mut self, lines: &[String]) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.out, "{}", rule)?;
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "{}", rule)?;
        self.out.flush()
    }

    /// Turns the outcome of a whole run into the process exit status, printing the error and
    /// a hint about the server when the run failed.
    pub fn conclude(&mut self, result: anyhow::Result<()>) -> u8 {
        let err = match result {
            Ok(()) => return 0,
            Err(err) => err,
        };

        let printed = writeln!(self.out, "\nError: {:#}", err)
            .and_then(|_| writeln!(self.out, "\n{}", SERVER_HINT))
            .and_then(|_| self.out.flush());
        if printed.is_err() {
            eprintln!("Error: {:#}", err);
        }

        1
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
