use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use userseed_generate::Progress;

pub fn clear_screen<W: Write>(output: &mut W) -> io::Result<()> {
    queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
    output.flush()
}

/// Prints per-user progress, optionally redrawing from a cleared screen.
pub struct ProgressPrinter<W: Write> {
    output: W,
    clear: bool,
}

impl<W: Write> ProgressPrinter<W> {
    pub fn new(output: W, clear: bool) -> Self {
        Self { output, clear }
    }

    pub fn report(&mut self, progress: Progress) -> io::Result<()> {
        if self.clear {
            clear_screen(&mut self.output)?;
        }
        writeln!(
            self.output,
            "Creating User {} / {}",
            progress.current, progress.total
        )?;
        writeln!(self.output, "Progress: {:.2}%", progress.percent())?;
        self.output.flush()
    }
}
