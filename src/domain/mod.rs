pub mod entry;
pub mod question;
pub mod settings;

pub use entry::{Difficulty, VocabEntry};
pub use question::Question;
pub use settings::{GameSettings, InputMode, QuizDirection, QuizLength, QuizType};
