use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;

use super::commands::{ConsoleOutput, PlayerInput};
use super::decoder::Decoder;
use super::encoder::Encoder;

/// Synchronous text connection to a player.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    decoder: Decoder,
    encoder: Encoder,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            decoder: Decoder,
            encoder: Encoder,
        }
    }

    /// Reads one line. `None` once the input is exhausted.
    pub fn read_input(&mut self) -> io::Result<Option<PlayerInput>> {
        let mut in_line = String::new();
        if self.reader.read_line(&mut in_line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }

        let in_line = in_line.trim();
        debug!("Input: {:?}", in_line);

        Ok(Some(self.decoder.decode(in_line)))
    }

    pub fn send(&mut self, output: &ConsoleOutput) -> io::Result<()> {
        let out_line = self.encoder.encode(output);
        debug!("Output: {:?}", out_line);

        match output {
            // keep the cursor on the prompt line
            ConsoleOutput::Prompt => write!(self.writer, "{}", out_line)?,
            _ => writeln!(self.writer, "{}", out_line)?,
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
