//! The direct-execution backend.
//!
//! Walks the instruction sequence with a program counter, mutating turtle
//! state and driving a [`Surface`]. `REPEAT`/`LOOP` are real jumps backed by
//! a fixed-capacity stack holding a (resume pc, remaining count) pair per
//! active loop level.

use crate::color::Color;
use crate::error::Error;
use crate::program::{Command, Cursor, Program};

/// Surface dimensions the language assumes.
pub const WIDTH: i32 = 640;
pub const HEIGHT: i32 = 480;

const CENTER: Point = Point {
    x: WIDTH / 2,
    y: HEIGHT / 2,
};

/// An absolute pixel position on the drawing surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The drawing capability the interpreter renders through.
///
/// Calls are fire-and-forget, issued synchronously in program order; the
/// engine never inspects a result.
pub trait Surface {
    /// Reset the whole surface to the paper color.
    fn clear(&mut self, paper: Color);

    /// Draw a one-pixel-wide segment between two absolute positions.
    fn draw_line(&mut self, from: Point, to: Point, ink: Color);
}

/// A surface that swallows every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _paper: Color) {}
    fn draw_line(&mut self, _from: Point, _to: Point, _ink: Color) {}
}

/// Turtle pose and active colors, owned by one [`Interpreter`].
#[derive(Clone, Debug)]
pub struct Turtle {
    pub pos: Point,
    /// Heading in degrees. Kept signed and reduced by a truncating `% 360`
    /// after every turn; never normalized into `[0, 360)`.
    pub angle: i64,
    pub pen_down: bool,
    pub paper: Color,
    pub ink: Color,
}

impl Default for Turtle {
    fn default() -> Self {
        Turtle {
            pos: CENTER,
            angle: 0,
            pen_down: false,
            paper: Color::Black,
            ink: Color::White,
        }
    }
}

/// Fixed-capacity stack backing `REPEAT`/`LOOP`: 256 slots, two per active
/// loop level, so 128 levels of nesting fit. Overflow and underflow are
/// fatal.
struct LoopStack {
    slots: [i64; 256],
    sp: usize,
}

impl LoopStack {
    fn new() -> Self {
        LoopStack {
            slots: [0; 256],
            sp: 0,
        }
    }

    fn push(&mut self, value: i64) -> Result<(), Error> {
        if self.sp == self.slots.len() {
            return Err(Error::StackOverflow);
        }
        self.slots[self.sp] = value;
        self.sp += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<i64, Error> {
        if self.sp == 0 {
            return Err(Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.slots[self.sp])
    }
}

/// Executes programs against a [`Surface`].
///
/// Turtle state and the loop stack are created with the engine and carry
/// over between calls to [`run`](Interpreter::run); build a fresh engine per
/// program for a clean slate.
pub struct Interpreter<S> {
    surface: S,
    turtle: Turtle,
    stack: LoopStack,
}

impl<S: Surface> Interpreter<S> {
    pub fn new(surface: S) -> Self {
        Interpreter {
            surface,
            turtle: Turtle::default(),
            stack: LoopStack::new(),
        }
    }

    /// Final turtle pose, for hosts that draw a cursor on top.
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Build and run `src` in one blocking call.
    pub fn run(&mut self, src: &str) -> Result<(), Error> {
        let program = Program::parse(src)?;
        self.run_program(&program)
    }

    /// Execute an already built program.
    pub fn run_program(&mut self, program: &Program) -> Result<(), Error> {
        let mut cursor = Cursor::new(program);
        while !cursor.at_end() {
            let (name, line) = cursor.command()?;
            let command = Command::lookup(name).ok_or_else(|| Error::UnknownCommand {
                name: name.to_owned(),
                line,
            })?;
            log::trace!("run {command:?}, line {line}");
            self.exec(command, &mut cursor)?;
        }
        Ok(())
    }

    fn exec(&mut self, command: Command, cursor: &mut Cursor) -> Result<(), Error> {
        match command {
            Command::Home => {
                self.turtle.pos = CENTER;
                self.turtle.angle = 0;
                self.turtle.pen_down = false;
                self.surface.clear(self.turtle.paper);
            }
            Command::Paper => self.turtle.paper = cursor.color()?,
            Command::Ink => self.turtle.ink = cursor.color()?,
            Command::Pen => self.turtle.pen_down = cursor.pen_state()?,
            Command::Forward => {
                let (step, _) = cursor.number()?;
                self.step(step);
            }
            Command::Back => {
                let (step, _) = cursor.number()?;
                self.step(-step);
            }
            Command::Left => {
                let (turn, _) = cursor.number()?;
                self.turtle.angle = (self.turtle.angle + turn) % 360;
            }
            Command::Right => {
                let (turn, _) = cursor.number()?;
                self.turtle.angle = (self.turtle.angle - turn) % 360;
            }
            Command::Repeat => {
                let count = cursor.repeat_count()?;
                // The pc now points at the first instruction of the body.
                self.stack.push(cursor.pc() as i64)?;
                self.stack.push(count)?;
            }
            Command::Loop => {
                let count = self.stack.pop()? - 1;
                if count > 0 {
                    let pc = self.stack.pop()?;
                    self.stack.push(pc)?;
                    self.stack.push(count)?;
                    cursor.jump(pc as usize);
                } else {
                    // Done: drop the saved pc and fall through.
                    self.stack.pop()?;
                }
            }
        }
        Ok(())
    }

    /// Move along the current heading; a negative distance moves backwards.
    /// With the pen down, the segment is drawn before the pose updates.
    fn step(&mut self, distance: i64) {
        let theta = (self.turtle.angle as f64).to_radians();
        let dx = (distance as f64 * theta.cos()).round() as i32;
        let dy = (distance as f64 * theta.sin()).round() as i32;
        let from = self.turtle.pos;
        let to = Point {
            x: from.x + dx,
            y: from.y + dy,
        };
        if self.turtle.pen_down {
            self.surface.draw_line(from, to, self.turtle.ink);
        }
        self.turtle.pos = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_documented_ones() {
        let turtle = Turtle::default();
        assert_eq!(turtle.pos, Point { x: 320, y: 240 });
        assert_eq!(turtle.angle, 0);
        assert!(!turtle.pen_down);
        assert_eq!(turtle.paper, Color::Black);
        assert_eq!(turtle.ink, Color::White);
    }

    #[test]
    fn runs_pose_only_against_a_null_surface() {
        let mut interp = Interpreter::new(NullSurface);
        interp.run("PEN DOWN\nFORWARD 10\nLEFT 90\nHOME").unwrap();
        assert_eq!(interp.turtle().pos, CENTER);
        assert_eq!(interp.turtle().angle, 0);
    }

    #[test]
    fn stack_capacity_is_256_slots() {
        let mut stack = LoopStack::new();
        for i in 0..256 {
            stack.push(i).unwrap();
        }
        assert!(matches!(stack.push(256), Err(Error::StackOverflow)));
        for _ in 0..256 {
            stack.pop().unwrap();
        }
        assert!(matches!(stack.pop(), Err(Error::StackUnderflow)));
    }
}
