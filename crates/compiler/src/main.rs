use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use logo::Compiler;

/// The host page. It defines the reset/move/turn functions and the mutable
/// `paper`/`ink` bindings the compiled statements assume, over a 640x480
/// canvas. The compiled program replaces the marker comment at the bottom.
const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Logo</title>
    <style>
    canvas {
        padding-left: 0;
        padding-right: 0;
        margin-left: auto;
        margin-right: auto;
        display: block;
        width: 640px;
    }
    </style>
</head>
<body>
    <canvas width="640" height="480" id="canvas"></canvas>
    <script>
        const canvas = document.getElementById('canvas');
        const ctx = canvas.getContext("2d");
        // Half-pixel offset keeps one-pixel lines from antialiasing.
        ctx.translate(0.5, 0.5);

        var paper = 'black';
        var ink = 'white';
        var head = {x: 320, y: 240, angle: 0};
        var pendown = false;

        const clear = () => {
            ctx.fillStyle = paper;
            ctx.fillRect(0, 0, canvas.width, canvas.height);
        }

        const home = () => {
            head = {x: 320, y: 240, angle: 0};
            pendown = false;
            clear();
        }

        const drawLine = (x1, y1, x2, y2) => {
            ctx.strokeStyle = ink;
            ctx.beginPath();
            ctx.moveTo(x1, y1);
            ctx.lineTo(x2, y2);
            ctx.stroke();
        }

        const degToRad = (deg) => deg * (Math.PI / 180);

        const calcOffset = (step) => {
            const dx = step * Math.cos(degToRad(head.angle));
            const dy = step * Math.sin(degToRad(head.angle));
            return {dx: dx, dy: dy};
        }

        const forward = (step) => {
            const {dx, dy} = calcOffset(step);
            if (pendown) {
                drawLine(head.x, head.y, head.x + dx, head.y + dy);
            }
            head.x += dx;
            head.y += dy;
        }

        const back = (step) => {
            const {dx, dy} = calcOffset(step);
            if (pendown) {
                drawLine(head.x, head.y, head.x - dx, head.y - dy);
            }
            head.x -= dx;
            head.y -= dy;
        }

        const left = (value) => {
            head.angle = (head.angle + value) % 360;
        }

        const right = (value) => {
            head.angle = (head.angle - value) % 360;
        }

        // {{compiled-code}}
    </script>
</body>
</html>
"#;

const MARKER: &str = "// {{compiled-code}}";

/// Compile a turtle program into a self-contained HTML page.
#[derive(Parser, Debug)]
struct Args {
    /// Program to compile; stdin when omitted.
    input: Option<PathBuf>,

    /// Write the page here instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
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

    let mut compiler = Compiler::new(Vec::new());
    compiler.compile(&source)?;
    let script = String::from_utf8(compiler.into_writer())?;

    let page = TEMPLATE.replace(MARKER, &script);
    match &args.output {
        Some(path) => std::fs::write(path, page)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{page}"),
    }
    Ok(())
}
