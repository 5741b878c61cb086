use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use logo::{Color, Interpreter, Point, Surface};

/// Run a turtle program, printing every drawing call instead of rendering.
#[derive(Parser, Debug)]
struct Args {
    /// Program to run; stdin when omitted.
    input: Option<PathBuf>,
}

/// Surface that reports each call as one line on stdout.
struct TraceSurface;

fn hex(color: Color) -> String {
    let [r, g, b, _] = color.rgba();
    format!("#{r:02x}{g:02x}{b:02x}")
}

impl Surface for TraceSurface {
    fn clear(&mut self, paper: Color) {
        println!("clear {} {}", paper.name(), hex(paper));
    }

    fn draw_line(&mut self, from: Point, to: Point, ink: Color) {
        println!(
            "line ({}, {}) -> ({}, {}) {} {}",
            from.x,
            from.y,
            to.x,
            to.y,
            ink.name(),
            hex(ink)
        );
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let source = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut src = String::new();
            std::io::stdin()
                .read_to_string(&mut src)
                .context("failed to read stdin")?;
            src
        }
    };

    let mut interp = Interpreter::new(TraceSurface);
    interp.run(&source)?;

    let turtle = interp.turtle();
    println!(
        "turtle at ({}, {}), angle {}, pen {}",
        turtle.pos.x,
        turtle.pos.y,
        turtle.angle,
        if turtle.pen_down { "down" } else { "up" }
    );
    Ok(())
}
