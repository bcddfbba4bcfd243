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
#![allow(dead_code)]

mod arithmetic;
mod control_flow;
mod directive;
mod load_store;

use crate::ast::{Directive, Instruction, Register};
use crate::errors::AssemblyError;
use crate::parser::Token;
use anyhow::Result;

pub struct AstBuilder<'a> {
    tokens: &'a [Token],
    line: usize,
}

impl<'a> AstBuilder<'a> {
    pub fn new(tokens: &'a [Token], line: usize) -> Self {
        Self { tokens, line }
    }

    pub fn build_instruction(self) -> Result<Instruction, AssemblyError> {
        let mnemonic = match &self.tokens[0] {
            Token::Opcode(m) => m.clone(),
            _ => unreachable!("build_instruction called on a non-opcode line"),
        };
        let mut cursor = OperandCursor::new(&self.tokens[1..], self.line);
        let instruction = if mnemonic == "ADD" {
            self.build_add(&mut cursor)?
        } else if mnemonic == "AND" {
            self.build_and(&mut cursor)?
        } else if mnemonic == "NOT" {
            self.build_not(&mut cursor)?
        } else if let Some(flags) = control_flow::br_flags(&mnemonic) {
            self.build_br(flags, &mut cursor)?
        } else if mnemonic == "JMP" {
            self.build_jmp(&mut cursor)?
        } else if mnemonic == "JSRR" {
            self.build_jsrr(&mut cursor)?
        } else if mnemonic == "JSR" {
            self.build_jsr(&mut cursor)?
        } else if mnemonic == "RET" {
            Instruction::Ret
        } else if mnemonic == "RTI" {
            Instruction::Rti
        } else if mnemonic == "TRAP" {
            self.build_trap(&mut cursor)?
        } else if mnemonic == "LD" {
            self.build_ld(&mut cursor)?
        } else if mnemonic == "LDI" {
            self.build_ldi(&mut cursor)?
        } else if mnemonic == "LDR" {
            self.build_ldr(&mut cursor)?
        } else if mnemonic == "LEA" {
            self.build_lea(&mut cursor)?
        } else if mnemonic == "ST" {
            self.build_st(&mut cursor)?
        } else if mnemonic == "STI" {
            self.build_sti(&mut cursor)?
        } else if mnemonic == "STR" {
            self.build_str(&mut cursor)?
        } else {
            unreachable!("unhandled opcode '{}'", mnemonic)
        };
        cursor.expect_end()?;
        Ok(instruction)
    }

    pub fn build_directive(self) -> Result<Directive, AssemblyError> {
        let keyword = match &self.tokens[0] {
            Token::Directive(d) => d.clone(),
            _ => unreachable!("build_directive called on a non-directive line"),
        };
        let mut cursor = OperandCursor::new(&self.tokens[1..], self.line);
        let directive = match keyword.as_str() {
            ".ORIG" => directive::build_orig(&mut cursor)?,
            ".END" => Directive::End,
            ".FILL" => directive::build_fill(&mut cursor)?,
            ".BLKW" => directive::build_blkw(&mut cursor)?,
            ".STRINGZ" => directive::build_stringz(&mut cursor)?,
            other => unreachable!("unhandled directive '{}'", other),
        };
        cursor.expect_end()?;
        Ok(directive)
    }
}

/// A small cursor over the operand tokens following a mnemonic or directive,
/// exposing one "expect a slot of shape X" primitive per operand kind. Each
/// mnemonic builder composes these in the order its shape row specifies
/// instead of hand-matching on token counts.
pub struct OperandCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    line: usize,
}

impl<'a> OperandCursor<'a> {
    pub fn new(tokens: &'a [Token], line: usize) -> Self {
        Self { tokens, pos: 0, line }
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn line_for_errors(&self) -> usize {
        self.line
    }

    fn take(&mut self) -> Result<&'a Token, AssemblyError> {
        let tok = self.tokens.get(self.pos).ok_or_else(|| AssemblyError::ParseError {
            line: self.line,
            reason: "expected another operand, found end of line".to_string(),
        })?;
        self.pos += 1;
        Ok(tok)
    }

    pub fn expect_end(&self) -> Result<(), AssemblyError> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(AssemblyError::ParseError {
                line: self.line,
                reason: "too many operands".to_string(),
            })
        }
    }

    pub fn expect_register(&mut self) -> Result<Register, AssemblyError> {
        match self.take()? {
            Token::Register(idx) => Ok(Register(*idx)),
            other => Err(AssemblyError::ParseError {
                line: self.line,
                reason: format!("expected a register, found {}", other.describe()),
            }),
        }
    }

    fn numeric_value(&mut self) -> Result<i64, AssemblyError> {
        match self.take()? {
            Token::Hex(v) => Ok(*v as i64),
            Token::Number(v) => Ok(*v as i64),
            other => Err(AssemblyError::ParseError {
                line: self.line,
                reason: format!("expected a numeric literal, found {}", other.describe()),
            }),
        }
    }

    pub fn expect_immediate_in(&mut self, lo: i64, hi: i64) -> Result<i32, AssemblyError> {
        let save = self.pos;
        let value = self.numeric_value()?;
        if value < lo || value > hi {
            self.pos = save;
            return Err(AssemblyError::ParseError {
                line: self.line,
                reason: format!("immediate value {value} out of range [{lo}, {hi}]"),
            });
        }
        Ok(value as i32)
    }

    pub fn expect_label(&mut self) -> Result<String, AssemblyError> {
        match self.take()? {
            Token::Identifier(name) => Ok(name.clone()),
            other => Err(AssemblyError::ParseError {
                line: self.line,
                reason: format!("expected a label, found {}", other.describe()),
            }),
        }
    }

    pub fn expect_immediate_any(&mut self) -> Result<i32, AssemblyError> {
        let value = self.numeric_value()?;
        Ok(value as i32)
    }

    pub fn expect_string(&mut self) -> Result<String, AssemblyError> {
        match self.take()? {
            Token::Str(s) => Ok(s.clone()),
            other => Err(AssemblyError::ParseError {
                line: self.line,
                reason: format!("expected a string literal, found {}", other.describe()),
            }),
        }
    }
}
