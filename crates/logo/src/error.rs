/// Everything that can go wrong while lexing, building, or executing a
/// program.
///
/// All failures are fatal: the first error aborts the whole compile or run,
/// carrying the originating source line where one exists. Nothing is ever
/// downgraded to a warning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The lexer met a character it has no classification for.
    #[error("unknown character 0x{:02x} at line {line}", *ch as u32)]
    UnknownChar { ch: char, line: u32 },

    /// A digit run was followed by something other than whitespace or a
    /// newline, or did not fit a machine integer.
    #[error("malformed number at line {line}")]
    MalformedNumber { line: u32 },

    /// A token kind that cannot appear in the instruction sequence, or a
    /// non-identifier in command position.
    #[error("unexpected {found} at line {line}")]
    UnexpectedToken { found: &'static str, line: u32 },

    #[error("unknown command {name:?} at line {line}")]
    UnknownCommand { name: String, line: u32 },

    /// A command parameter of the wrong kind.
    #[error("expected {expected}, found {found} at line {line}")]
    BadParameter {
        expected: &'static str,
        found: &'static str,
        line: u32,
    },

    #[error("unrecognized color {name:?} at line {line}")]
    UnknownColor { name: String, line: u32 },

    #[error("pen takes UP or DOWN, found {name:?} at line {line}")]
    BadPenState { name: String, line: u32 },

    #[error("repeat count {count} out of range at line {line}")]
    RepeatCount { count: i64, line: u32 },

    /// A command still wanted parameters when the sequence ended.
    #[error("unexpected end of program")]
    UnexpectedEnd,

    #[error("loop stack overflow")]
    StackOverflow,

    #[error("loop stack underflow")]
    StackUnderflow,

    /// The compiler's output sink refused a write.
    #[error("failed to write compiled output")]
    Emit(#[source] std::io::Error),
}
