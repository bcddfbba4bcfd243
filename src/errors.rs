use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AssemblyError {
    #[error("Syntax Error: {0}")]
    PestError(#[from] pest::error::Error<crate::parser::Rule>),

    #[error("Parse Error on line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    #[error("Symbol Error on line {line}: {reason}")]
    SymbolError { line: usize, reason: String },

    #[error("Encode Error on line {line}: {reason}")]
    EncodeError { line: usize, reason: String },
}
