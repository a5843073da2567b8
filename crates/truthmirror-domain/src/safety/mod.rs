mod scanner;
mod validator;

pub use scanner::{DangerWordScanner, DANGER_PHRASES};
pub use validator::{
    EntryCheck, EntryValidator, LengthPolicy, DANGER_NOTICE, EMPTY_ENTRY_MESSAGE, LENGTH_MESSAGE,
    MAX_ENTRY_CHARS, MIN_ENTRY_CHARS,
};
