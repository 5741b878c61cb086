//! The script-emitting backend.
//!
//! Walks the instruction sequence and writes one JavaScript statement per
//! command to the sink. `REPEAT`/`LOOP` become nested `for` blocks instead
//! of jumps, so this backend needs neither turtle state nor the loop stack.

use std::fmt;
use std::io::Write;

use crate::error::Error;
use crate::program::{Command, Cursor, Program};

/// Compiles a program into statement text for the canvas host.
///
/// Each `REPEAT` gets its own generated loop counter (`v1`, `v2`, …); the
/// numbering restarts on every compile, so identical input always produces
/// byte-identical output.
pub struct Compiler<W> {
    writer: W,
    vidx: u32,
}

impl<W: Write> Compiler<W> {
    pub fn new(writer: W) -> Self {
        Compiler { writer, vidx: 0 }
    }

    /// Hand the sink back, e.g. to recover an in-memory buffer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Build and compile `src` in one call.
    pub fn compile(&mut self, src: &str) -> Result<(), Error> {
        let program = Program::parse(src)?;
        self.compile_program(&program)
    }

    /// Compile an already built program.
    pub fn compile_program(&mut self, program: &Program) -> Result<(), Error> {
        self.vidx = 0;
        let mut cursor = Cursor::new(program);
        while !cursor.at_end() {
            let (name, line) = cursor.command()?;
            let command = Command::lookup(name).ok_or_else(|| Error::UnknownCommand {
                name: name.to_owned(),
                line,
            })?;
            log::trace!("compile {command:?}, line {line}");
            self.emit(command, &mut cursor)?;
        }
        Ok(())
    }

    fn emit(&mut self, command: Command, cursor: &mut Cursor) -> Result<(), Error> {
        match command {
            Command::Home => self.write(format_args!("home();"))?,
            Command::Paper => {
                let color = cursor.color()?;
                self.write(format_args!("paper = '{}';", color.name()))?;
            }
            Command::Ink => {
                let color = cursor.color()?;
                self.write(format_args!("ink = '{}';", color.name()))?;
            }
            Command::Pen => {
                let down = cursor.pen_state()?;
                self.write(format_args!("pendown = {down};"))?;
            }
            Command::Forward => {
                let (step, _) = cursor.number()?;
                self.write(format_args!("forward({step});"))?;
            }
            Command::Back => {
                let (step, _) = cursor.number()?;
                self.write(format_args!("back({step});"))?;
            }
            Command::Left => {
                let (turn, _) = cursor.number()?;
                self.write(format_args!("left({turn});"))?;
            }
            Command::Right => {
                let (turn, _) = cursor.number()?;
                self.write(format_args!("right({turn});"))?;
            }
            Command::Repeat => {
                let count = cursor.repeat_count()?;
                self.vidx += 1;
                let v = self.vidx;
                self.write(format_args!("for(let v{v}=0;v{v}<{count};++v{v}){{"))?;
            }
            Command::Loop => self.write(format_args!("}}"))?,
        }
        Ok(())
    }

    fn write(&mut self, statement: fmt::Arguments) -> Result<(), Error> {
        self.writer.write_fmt(statement).map_err(Error::Emit)
    }
}
