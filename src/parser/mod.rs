/*
Copyright 2025 Connor Nolan

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

mod ast_builder;

use crate::ast::{Located, Statement};
use crate::errors::AssemblyError;
use anyhow::Result;
use ast_builder::AstBuilder;
use pest::Parser;
use pest_derive::Parser;

// Derive the lexer from our grammar file. One pest parse per source line;
// the grammar's ordered choice over token kinds reproduces the reference
// lexer's "first pattern in priority order that matches" behavior exactly.
#[derive(Parser)]
#[grammar = "./grammar.pest"]
pub struct LineLexer;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Hex(u32),
    Number(i32),
    Str(String),
    Opcode(String),
    Directive(String),
    Register(u8),
    Label(String),
    Identifier(String),
}

impl Token {
    pub fn describe(&self) -> &'static str {
        match self {
            Token::Hex(_) => "a hex literal",
            Token::Number(_) => "a number",
            Token::Str(_) => "a string",
            Token::Opcode(_) => "an opcode",
            Token::Directive(_) => "a directive",
            Token::Register(_) => "a register",
            Token::Label(_) => "a label",
            Token::Identifier(_) => "an identifier",
        }
    }
}

fn decode_string_escapes(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

fn lex_line(line_num: usize, text: &str) -> Result<Vec<Token>, AssemblyError> {
    let pairs = LineLexer::parse(Rule::line, text).map_err(AssemblyError::PestError)?;
    let mut tokens = Vec::new();
    for pair in pairs.flatten() {
        let token = match pair.as_rule() {
            Rule::hex => {
                let digits = pair.as_str().trim_start_matches(['0', 'x']);
                let value =
                    u32::from_str_radix(digits, 16).map_err(|_| AssemblyError::ParseError {
                        line: line_num,
                        reason: format!("invalid hex literal '{}'", pair.as_str()),
                    })?;
                Token::Hex(value)
            }
            Rule::number => {
                let value = pair
                    .as_str()
                    .trim_start_matches('#')
                    .parse::<i32>()
                    .map_err(|_| AssemblyError::ParseError {
                        line: line_num,
                        reason: format!("invalid number '{}'", pair.as_str()),
                    })?;
                Token::Number(value)
            }
            Rule::string => Token::Str(decode_string_escapes(pair.as_str())),
            Rule::opcode => Token::Opcode(pair.as_str().to_ascii_uppercase()),
            Rule::directive => Token::Directive(pair.as_str().to_ascii_uppercase()),
            Rule::register => {
                let idx = pair.as_str()[1..].parse::<u8>().unwrap();
                Token::Register(idx)
            }
            Rule::label => {
                let text = pair.as_str();
                Token::Label(text[..text.len() - 1].to_string())
            }
            Rule::identifier => Token::Identifier(pair.as_str().to_string()),
            _ => continue,
        };
        tokens.push(token);
    }
    Ok(tokens)
}

// Splits source text into non-empty, 1-indexed physical lines, stripping a
// trailing carriage return so CRLF input lexes the same as LF input.
fn physical_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.strip_suffix('\r').unwrap_or(l)))
}

/// Parses an entire source string into the flat statement stream pass 1 and
/// pass 2 both consume.
pub fn parse_source(source: &str) -> Result<Vec<Located<Statement>>, AssemblyError> {
    let mut out = Vec::new();
    for (line_num, text) in physical_lines(source) {
        let tokens = lex_line(line_num, text)?;
        out.extend(parse_line(&tokens, line_num)?);
    }
    Ok(out)
}

/// Recursively splits a label prefix off the front of a token line, then
/// dispatches the remainder to the opcode/directive builders. Mirrors the
/// reference parser's own recursive line-splitting rule for rule.
fn parse_line(tokens: &[Token], line_num: usize) -> Result<Vec<Located<Statement>>, AssemblyError> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    if tokens.len() > 1 && matches!(tokens[0], Token::Label(_)) {
        let mut head = parse_line(&tokens[..1], line_num)?;
        head.extend(parse_line(&tokens[1..], line_num)?);
        return Ok(head);
    }
    if tokens.len() > 1
        && matches!(tokens[0], Token::Identifier(_))
        && matches!(tokens[1], Token::Opcode(_) | Token::Directive(_))
    {
        let mut head = parse_line(&tokens[..1], line_num)?;
        head.extend(parse_line(&tokens[1..], line_num)?);
        return Ok(head);
    }

    if tokens.len() == 1 {
        match &tokens[0] {
            Token::Label(name) => {
                return Ok(vec![Located { line: line_num, value: Statement::LabelDecl(name.clone()) }]);
            }
            Token::Identifier(name) => {
                return Ok(vec![Located { line: line_num, value: Statement::LabelDecl(name.clone()) }]);
            }
            _ => {}
        }
    }

    let builder = AstBuilder::new(tokens, line_num);
    let statement = match &tokens[0] {
        Token::Opcode(_) => Statement::Instruction(builder.build_instruction()?),
        Token::Directive(_) => Statement::Directive(builder.build_directive()?),
        other => {
            return Err(AssemblyError::ParseError {
                line: line_num,
                reason: format!("unexpected {} at start of statement", other.describe()),
            });
        }
    };
    Ok(vec![Located { line: line_num, value: statement }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AddAndOperand, Directive, FillValue, Instruction, Register};

    #[test]
    fn test_parse_minimal_program() {
        let source = ".ORIG x3000\nHALT TRAP x25\n.END\n";
        let lines = parse_source(source).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].value, Statement::Directive(Directive::Orig(0x3000)));
        assert_eq!(lines[1].value, Statement::LabelDecl("HALT".to_string()));
        assert_eq!(
            lines[2].value,
            Statement::Instruction(Instruction::Trap { trapvect8: 0x25 })
        );
    }

    #[test]
    fn test_parse_add_imm5() {
        let lines = parse_source("ADD R1,R1,#-1\n").unwrap();
        assert_eq!(
            lines[0].value,
            Statement::Instruction(Instruction::Add {
                dr: Register(1),
                sr1: Register(1),
                sr2_or_imm: AddAndOperand::Imm5(-1),
            })
        );
    }

    #[test]
    fn test_parse_add_imm5_out_of_range_is_error() {
        let result = parse_source("ADD R0,R1,#16\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_register_colon_does_not_lex_as_label() {
        // REGISTER is tried before LABEL, so "R1:" lexes as REGISTER("R1")
        // followed by a dangling ':' that matches nothing.
        let result = lex_line(1, "R1: ADD R0,R0,R0");
        assert!(result.is_err());
    }

    #[test]
    fn test_identifier_beginning_with_mnemonic_splits() {
        let tokens = lex_line(1, "ADDER").unwrap();
        assert_eq!(tokens, vec![Token::Opcode("ADD".to_string()), Token::Identifier("ER".to_string())]);
    }

    #[test]
    fn test_br_wrong_suffix_order_is_parse_error() {
        // "BRpz" lexes as Opcode("BRp") + trailing Identifier("z"), which
        // then fails operand-count validation for BR.
        let result = parse_source("BRpz LOOP\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_fill_with_label() {
        let lines = parse_source(".FILL TARGET\n").unwrap();
        assert_eq!(
            lines[0].value,
            Statement::Directive(Directive::Fill(FillValue::Label("TARGET".to_string())))
        );
    }

    #[test]
    fn test_parse_stringz() {
        let lines = parse_source(r#".STRINGZ "Hi""#).unwrap();
        assert_eq!(
            lines[0].value,
            Statement::Directive(Directive::Stringz("Hi".to_string()))
        );
    }

    #[test]
    fn test_bare_label_without_colon() {
        let lines = parse_source("LOOP ADD R0,R0,R0\n").unwrap();
        assert_eq!(lines[0].value, Statement::LabelDecl("LOOP".to_string()));
    }
}
