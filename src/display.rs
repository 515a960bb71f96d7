use crate::Frame;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};

/// Output the simulation draws its frames to.
pub trait DisplayDriver {
    /// Wipes whatever the previous frame left on screen.
    fn clear(&mut self) -> io::Result<()>;

    fn write(&mut self, frame: &Frame) -> io::Result<()>;
}

/// Terminal display: clears with escape sequences and prints frames as plain text.
pub struct TerminalDisplay<W: Write> {
    out: W,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayDriver for TerminalDisplay<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write(&mut self, frame: &Frame) -> io::Result<()> {
        self.out.write_all(frame.as_str().as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameOfLife;

    #[test]
    fn test_frame_follows_clear() {
        let mut life = GameOfLife::<3, 3>::new();
        life.set_cell(1, 1, true).unwrap();
        let frame = life.render();

        let mut display = TerminalDisplay::new(Vec::new());
        display.clear().unwrap();
        display.write(&frame).unwrap();
        let written = String::from_utf8(display.into_inner()).unwrap();

        assert!(written.ends_with("|   |\n| * |\n|   |\nx---x\n"));
        assert!(written.ends_with(frame.as_str()));
        #[cfg(unix)]
        assert!(written.starts_with("\x1b[2J"));
    }

    #[test]
    fn test_write_error_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let frame = GameOfLife::<2, 2>::new().render();
        let err = TerminalDisplay::new(Broken).write(&frame).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
