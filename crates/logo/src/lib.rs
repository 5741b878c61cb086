//! A small turtle-graphics command language.
//!
//! The front end is shared: [`Lexer`](lexer::Lexer) turns source text into
//! tokens and [`Program::parse`] flattens them into an immutable instruction
//! sequence. Two backends then walk that sequence the same way:
//! [`Compiler`] emits equivalent JavaScript statements for a canvas host,
//! while [`Interpreter`] executes directly against a [`Surface`].

pub mod color;
pub mod compile;
pub mod error;
pub mod interp;
pub mod lexer;
pub mod program;

pub use color::Color;
pub use compile::Compiler;
pub use error::Error;
pub use interp::{Interpreter, NullSurface, Point, Surface, Turtle, HEIGHT, WIDTH};
pub use program::{Command, Program, Step, StepKind};
