pub mod fallback;
pub mod formatter;
pub mod generate;
pub mod matcher;
pub mod parse;
pub mod prompt;
pub mod validator;
