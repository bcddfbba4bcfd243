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

use crate::ast::{Directive, FillValue};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::OperandCursor;
use crate::parser::Token;

// .ORIG only ever takes a hex literal in the reference assembler; a decimal
// NUMBER token here is rejected rather than silently accepted.
pub fn build_orig(cursor: &mut OperandCursor) -> Result<Directive, AssemblyError> {
    match cursor.peek() {
        Some(Token::Hex(_)) => {}
        other => {
            return Err(AssemblyError::ParseError {
                line: cursor_line(cursor),
                reason: format!(
                    "expected a hex address after .ORIG, found {}",
                    other.map(Token::describe).unwrap_or("end of line")
                ),
            });
        }
    }
    let address = cursor.expect_immediate_any()?;
    if !(0..=u16::MAX as i32).contains(&address) {
        return Err(AssemblyError::ParseError {
            line: cursor_line(cursor),
            reason: format!(".ORIG address x{address:X} does not fit in 16 bits"),
        });
    }
    Ok(Directive::Orig(address as u16))
}

pub fn build_fill(cursor: &mut OperandCursor) -> Result<Directive, AssemblyError> {
    match cursor.peek() {
        Some(Token::Identifier(_)) => {
            let name = cursor.expect_label()?;
            Ok(Directive::Fill(FillValue::Label(name)))
        }
        _ => {
            let value = cursor.expect_immediate_any()?;
            Ok(Directive::Fill(FillValue::Immediate(value)))
        }
    }
}

pub fn build_blkw(cursor: &mut OperandCursor) -> Result<Directive, AssemblyError> {
    let count = cursor.expect_immediate_any()?;
    if count <= 0 || count > u16::MAX as i32 {
        return Err(AssemblyError::ParseError {
            line: cursor_line(cursor),
            reason: format!(".BLKW count must be positive and fit in 16 bits, found {count}"),
        });
    }
    Ok(Directive::Blkw(count as u16))
}

pub fn build_stringz(cursor: &mut OperandCursor) -> Result<Directive, AssemblyError> {
    let s = cursor.expect_string()?;
    Ok(Directive::Stringz(s))
}

// expect_* leaves the cursor's line number private to ast_builder::mod; this
// mirrors it for the free-function directive builders that live outside
// that module.
fn cursor_line(cursor: &OperandCursor) -> usize {
    cursor.line_for_errors()
}
