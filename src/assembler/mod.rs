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

pub mod encoder;
pub mod symbol_table;

use crate::ast::{Directive, Located, Statement};
use crate::errors::AssemblyError;
use encoder::{Encoder, statement_word_size};
use symbol_table::{SymbolTable, insert_label};

/// Pass 1: locate `.ORIG`, then walk the statement stream advancing the
/// location counter by each statement's word size, recording every label's
/// address along the way.
pub fn build_symbol_table(statements: &[Located<Statement>]) -> Result<SymbolTable, AssemblyError> {
    let mut symbol_table = SymbolTable::new();
    let mut location_counter: Option<u32> = None;

    for located in statements {
        if let Statement::Directive(Directive::End) = &located.value {
            break;
        }

        if let Statement::Directive(Directive::Orig(addr)) = &located.value {
            // a second .ORIG is ignored for counter purposes
            if location_counter.is_none() {
                location_counter = Some(*addr as u32);
            }
            continue;
        }

        let counter = location_counter.ok_or_else(|| AssemblyError::SymbolError {
            line: located.line,
            reason: "no .ORIG directive found before the first statement".to_string(),
        })?;

        if let Statement::LabelDecl(name) = &located.value {
            insert_label(&mut symbol_table, name.clone(), counter as u16, located.line)?;
            continue;
        }

        let size = statement_word_size(&located.value) as u32;
        let next = counter + size;
        if next > 0x10000 {
            return Err(AssemblyError::SymbolError {
                line: located.line,
                reason: format!(
                    "program extends past the top of the address space (location counter would reach x{next:X})"
                ),
            });
        }
        location_counter = Some(next);
    }

    Ok(symbol_table)
}

/// Pass 2: re-walk the same statement stream, this time emitting each
/// statement's words. The origin word is prepended to the output.
pub fn generate_machine_code(
    statements: &[Located<Statement>],
    symbol_table: &SymbolTable,
) -> Result<Vec<u16>, AssemblyError> {
    let mut words = Vec::new();
    let mut location_counter: Option<u16> = None;
    let mut done = false;

    for located in statements {
        if done {
            break;
        }
        match &located.value {
            Statement::Directive(Directive::Orig(addr)) => {
                // a second .ORIG is ignored for counter purposes
                if location_counter.is_none() {
                    location_counter = Some(*addr);
                    words.push(*addr);
                }
                continue;
            }
            Statement::Directive(Directive::End) => {
                done = true;
                continue;
            }
            Statement::LabelDecl(_) => continue,
            _ => {}
        }

        let counter = location_counter.ok_or_else(|| AssemblyError::EncodeError {
            line: located.line,
            reason: "no .ORIG directive found before the first statement".to_string(),
        })?;

        let encoder = Encoder::new(symbol_table, located.line, counter);
        let emitted = match &located.value {
            Statement::Instruction(instruction) => encoder.encode_instruction(instruction)?,
            Statement::Directive(directive) => encoder.encode_directive(directive)?,
            Statement::LabelDecl(_) => unreachable!(),
        };
        location_counter = Some(counter + emitted.len() as u16);
        words.extend(emitted);
    }

    Ok(words)
}
