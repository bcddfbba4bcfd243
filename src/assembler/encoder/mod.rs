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

pub mod constants;
mod instruction_encoders;
pub mod utility_functions;

use crate::assembler::symbol_table::{SymbolTable, get_symbol};
use crate::ast::{Directive, FillValue, Instruction};
use crate::errors::AssemblyError;
use instruction_encoders::load_store::encode_stringz;

/// Encodes a single statement's word(s) during pass 2. Carries a borrow of
/// the now-complete symbol table plus the statement's own line number and
/// the location counter it sits at, so every `encode_*` method has what it
/// needs without threading extra arguments through every call site.
pub struct Encoder<'a> {
    symbol_table: &'a SymbolTable,
    line_num: usize,
    location_counter: u16,
}

impl<'a> Encoder<'a> {
    pub fn new(symbol_table: &'a SymbolTable, line_num: usize, location_counter: u16) -> Self {
        Self { symbol_table, line_num, location_counter }
    }

    pub fn encode_instruction(self, instruction: &Instruction) -> Result<Vec<u16>, AssemblyError> {
        let word = match instruction {
            Instruction::Add { dr, sr1, sr2_or_imm } => self.encode_add(*dr, *sr1, sr2_or_imm)?,
            Instruction::And { dr, sr1, sr2_or_imm } => self.encode_and(*dr, *sr1, sr2_or_imm)?,
            Instruction::Not { dr, sr } => self.encode_not(*dr, *sr),
            Instruction::Br { flags, target } => self.encode_br(*flags, target)?,
            Instruction::Jmp { base_r } => self.encode_jmp(*base_r),
            Instruction::Ret => self.encode_ret(),
            Instruction::Jsr { target } => self.encode_jsr(target)?,
            Instruction::Jsrr { base_r } => self.encode_jsrr(*base_r),
            Instruction::Rti => self.encode_rti(),
            Instruction::Trap { trapvect8 } => self.encode_trap(*trapvect8),
            Instruction::Ld { dr, label } => self.encode_ld(*dr, label)?,
            Instruction::Ldi { dr, label } => self.encode_ldi(*dr, label)?,
            Instruction::Lea { dr, label } => self.encode_lea(*dr, label)?,
            Instruction::St { sr, label } => self.encode_st(*sr, label)?,
            Instruction::Sti { sr, label } => self.encode_sti(*sr, label)?,
            Instruction::Ldr { dr, base_r, offset6 } => self.encode_ldr(*dr, *base_r, *offset6)?,
            Instruction::Str { sr, base_r, offset6 } => self.encode_str(*sr, *base_r, *offset6)?,
        };
        Ok(vec![word])
    }

    pub fn encode_directive(self, directive: &Directive) -> Result<Vec<u16>, AssemblyError> {
        match directive {
            Directive::Orig(_) | Directive::End => Ok(Vec::new()),
            Directive::Fill(FillValue::Immediate(v)) => Ok(vec![*v as u16]),
            Directive::Fill(FillValue::Label(name)) => {
                Ok(vec![get_symbol(self.symbol_table, name, self.line_num)?])
            }
            Directive::Blkw(n) => Ok(vec![0u16; *n as usize]),
            Directive::Stringz(s) => Ok(encode_stringz(s)),
        }
    }
}

/// The number of 16-bit words a statement occupies once assembled. Pass 1
/// and pass 2 both call this so the location counter and the words pass 2
/// actually emits can never drift apart.
pub fn statement_word_size(statement: &crate::ast::Statement) -> u16 {
    use crate::ast::Statement;
    match statement {
        Statement::LabelDecl(_) => 0,
        Statement::Directive(Directive::Orig(_)) => 0,
        Statement::Directive(Directive::End) => 0,
        Statement::Directive(Directive::Fill(_)) => 1,
        Statement::Directive(Directive::Blkw(n)) => *n,
        Statement::Directive(Directive::Stringz(s)) => ((s.len() + 2) / 2) as u16,
        Statement::Instruction(_) => 1,
    }
}
