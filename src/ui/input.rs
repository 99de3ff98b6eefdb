// Wed Jan 15 2026 - Alex

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Line prompts for run parameters missing from the command line.
pub struct Prompter<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Re-asks until a non-empty answer is given.
    pub fn prompt_path(&mut self, message: &str) -> io::Result<PathBuf> {
        loop {
            let answer = self.prompt(message)?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_path_skips_blank_lines() {
        let input = Cursor::new("\n   \n  il2cpp.h  \n");
        let mut prompter = Prompter::new(input, Vec::new());

        let path = prompter.prompt_path("Structs file: ").unwrap();
        assert_eq!(path, PathBuf::from("il2cpp.h"));

        let written = String::from_utf8(prompter.into_writer()).unwrap();
        assert_eq!(written.matches("Structs file: ").count(), 3);
    }

    #[test]
    fn test_prompt_eof() {
        let mut prompter = Prompter::new(Cursor::new(""), Vec::new());
        let err = prompter.prompt("x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
