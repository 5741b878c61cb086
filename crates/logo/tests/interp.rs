use logo::{Color, Error, Interpreter, Point, Surface};

/// Surface that remembers every call for inspection.
#[derive(Default)]
struct Recorder {
    clears: Vec<Color>,
    lines: Vec<(Point, Point, Color)>,
}

impl Surface for Recorder {
    fn clear(&mut self, paper: Color) {
        self.clears.push(paper);
    }

    fn draw_line(&mut self, from: Point, to: Point, ink: Color) {
        self.lines.push((from, to, ink));
    }
}

fn run(src: &str) -> Result<Interpreter<Recorder>, Error> {
    let mut interp = Interpreter::new(Recorder::default());
    interp.run(src)?;
    Ok(interp)
}

fn at(x: i32, y: i32) -> Point {
    Point { x, y }
}

#[test]
fn empty_and_comment_only_programs_run_clean() {
    for src in ["", "   \t ", "# nothing\n\n  # more nothing\n"] {
        let interp = run(src).unwrap();
        assert!(interp.surface().lines.is_empty());
        assert!(interp.surface().clears.is_empty());
        assert_eq!(interp.turtle().pos, at(320, 240));
    }
}

#[test]
fn forward_moves_along_the_heading() {
    let interp = run("FORWARD 100").unwrap();
    assert_eq!(interp.turtle().pos, at(420, 240));

    // Right turns are negative angles; y shrinks.
    let interp = run("RIGHT 90\nFORWARD 100").unwrap();
    assert_eq!(interp.turtle().pos, at(320, 140));

    let interp = run("LEFT 90\nFORWARD 100").unwrap();
    assert_eq!(interp.turtle().pos, at(320, 340));
}

#[test]
fn back_is_the_exact_inverse_of_forward() {
    let interp = run("LEFT 30\nPEN DOWN\nFORWARD 7\nBACK 7").unwrap();
    assert_eq!(interp.turtle().pos, at(320, 240));
    assert_eq!(interp.surface().lines.len(), 2);
    let (from, to, _) = interp.surface().lines[1];
    assert_eq!((to, from), (interp.surface().lines[0].0, interp.surface().lines[0].1));
}

#[test]
fn pen_state_gates_drawing() {
    let interp = run("FORWARD 50\nBACK 50").unwrap();
    assert!(interp.surface().lines.is_empty());

    // Exactly one segment per move while the pen is down.
    let interp = run("PEN DOWN\nFORWARD 50\nPEN UP\nFORWARD 10").unwrap();
    assert_eq!(
        interp.surface().lines,
        vec![(at(320, 240), at(370, 240), Color::White)]
    );
    assert_eq!(interp.turtle().pos, at(380, 240));
}

#[test]
fn segments_are_drawn_before_the_pose_updates() {
    let interp = run("PEN DOWN\nFORWARD 10\nFORWARD 10").unwrap();
    assert_eq!(
        interp.surface().lines,
        vec![
            (at(320, 240), at(330, 240), Color::White),
            (at(330, 240), at(340, 240), Color::White),
        ]
    );
}

#[test]
fn colors_reach_the_surface() {
    let interp = run("PAPER GREEN\nINK red\nHOME\nPEN DOWN\nFORWARD 10").unwrap();
    assert_eq!(interp.surface().clears, vec![Color::Green]);
    assert_eq!(interp.surface().lines[0].2, Color::Red);
}

#[test]
fn home_resets_pose_and_pen_in_one_go() {
    let interp = run("PEN DOWN\nLEFT 45\nFORWARD 10\nHOME\nFORWARD 5").unwrap();
    // HOME also lifts the pen, so the post-HOME move draws nothing.
    assert_eq!(interp.surface().lines.len(), 1);
    assert_eq!(interp.surface().clears.len(), 1);
    assert_eq!(interp.turtle().pos, at(325, 240));
    assert_eq!(interp.turtle().angle, 0);
    assert!(!interp.turtle().pen_down);
}

#[test]
fn angle_reduces_modulo_360_and_may_stay_negative() {
    let interp = run("RIGHT 450").unwrap();
    assert_eq!(interp.turtle().angle, -90);

    let interp = run("LEFT 720\nLEFT 30").unwrap();
    assert_eq!(interp.turtle().angle, 30);

    // A negative heading still drives the trigonometry correctly.
    let interp = run("RIGHT 450\nFORWARD 100").unwrap();
    assert_eq!(interp.turtle().pos, at(320, 140));
}

#[test]
fn repeat_runs_the_body_exactly_n_times() {
    let interp = run("PEN DOWN\nREPEAT 5\nFORWARD 10\nLOOP").unwrap();
    assert_eq!(interp.surface().lines.len(), 5);
    assert_eq!(interp.turtle().pos, at(370, 240));

    let interp = run("PEN DOWN\nREPEAT 1\nFORWARD 10\nLOOP").unwrap();
    assert_eq!(interp.surface().lines.len(), 1);
}

#[test]
fn nested_repeats_multiply() {
    let interp = run("PEN DOWN\nREPEAT 3\nREPEAT 4\nFORWARD 1\nLOOP\nLOOP").unwrap();
    assert_eq!(interp.surface().lines.len(), 12);
}

#[test]
fn a_square_closes_on_itself() {
    let interp = run("PEN DOWN\nREPEAT 4\nFORWARD 80\nRIGHT 90\nLOOP").unwrap();
    assert_eq!(interp.surface().lines.len(), 4);
    assert_eq!(interp.turtle().pos, at(320, 240));
    assert_eq!(interp.turtle().angle, 0);
}

fn nested_loops(depth: usize) -> String {
    let mut src = String::new();
    for _ in 0..depth {
        src.push_str("REPEAT 1\n");
    }
    src.push_str("FORWARD 1\n");
    for _ in 0..depth {
        src.push_str("LOOP\n");
    }
    src
}

#[test]
fn nesting_fills_the_stack_at_128_levels() {
    let interp = run(&nested_loops(128)).unwrap();
    assert_eq!(interp.turtle().pos, at(321, 240));

    assert!(matches!(
        run(&nested_loops(129)),
        Err(Error::StackOverflow)
    ));
}

#[test]
fn loop_without_repeat_underflows() {
    assert!(matches!(run("LOOP"), Err(Error::StackUnderflow)));
}

#[test]
fn errors_name_the_offending_line() {
    assert!(matches!(
        run("HOME\nFOO"),
        Err(Error::UnknownCommand { line: 2, .. })
    ));
    assert!(matches!(
        run("PAPER PURPLE"),
        Err(Error::UnknownColor { line: 1, .. })
    ));
    assert!(matches!(
        run("PEN SIDEWAYS"),
        Err(Error::BadPenState { line: 1, .. })
    ));
    assert!(matches!(
        run("REPEAT 0\nFORWARD 1\nLOOP"),
        Err(Error::RepeatCount { count: 0, line: 1 })
    ));
    assert!(matches!(run("LEFT"), Err(Error::UnexpectedEnd)));
}

#[test]
fn zero_length_moves_still_draw() {
    let interp = run("PEN DOWN\nFORWARD 0").unwrap();
    assert_eq!(
        interp.surface().lines,
        vec![(at(320, 240), at(320, 240), Color::White)]
    );
}
