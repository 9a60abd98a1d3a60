use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};
use unicode_width::UnicodeWidthChar;

/// A single terminal line redrawn in place.
///
/// Used under the spinner: each `draw` replaces the previous content and
/// `finish` leaves a final line behind and moves on. Drawn content is cut
/// to one column less than `width` so it never wraps; a width of 0 means
/// unknown and disables the cut.
#[derive(Debug, Default)]
pub struct LiveLine {
    drawn: bool,
    width: u16,
}

impl LiveLine {
    pub fn new(width: u16) -> Self {
        Self { drawn: false, width }
    }

    pub fn draw(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        self.erase(out)?;
        out.queue(cursor::Hide)?;
        let line = first_line(content);
        out.write_all(fit_width(line, usize::from(self.width).saturating_sub(1)).as_bytes())?;
        out.flush()?;
        self.drawn = true;
        Ok(())
    }

    /// Replace the live content with `content` and end the line.
    pub fn finish(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        self.erase(out)?;
        out.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.queue(cursor::Show)?;
        out.flush()?;
        self.drawn = false;
        Ok(())
    }

    fn erase(&self, out: &mut impl Write) -> io::Result<()> {
        if self.drawn {
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        }
        Ok(())
    }
}

fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or("")
}

/// Longest prefix of `line` that fits in `max` display columns.
fn fit_width(line: &str, max: usize) -> &str {
    if max == 0 {
        return line;
    }
    let mut used = 0;
    for (idx, c) in line.char_indices() {
        used += c.width().unwrap_or(0);
        if used > max {
            return &line[..idx];
        }
    }
    line
}
