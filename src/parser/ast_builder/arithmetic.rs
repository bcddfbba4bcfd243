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

use crate::ast::{AddAndOperand, Instruction};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::{AstBuilder, OperandCursor};
use crate::parser::Token;

impl<'a> AstBuilder<'a> {
    pub(super) fn build_add(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let sr1 = cursor.expect_register()?;
        let sr2_or_imm = self.build_sr2_or_imm5(cursor)?;
        Ok(Instruction::Add { dr, sr1, sr2_or_imm })
    }

    pub(super) fn build_and(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let sr1 = cursor.expect_register()?;
        let sr2_or_imm = self.build_sr2_or_imm5(cursor)?;
        Ok(Instruction::And { dr, sr1, sr2_or_imm })
    }

    pub(super) fn build_not(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let sr = cursor.expect_register()?;
        Ok(Instruction::Not { dr, sr })
    }

    // ADD/AND's third operand is a register or an imm5, distinguished by the
    // token kind at that position rather than by a separate grammar rule.
    fn build_sr2_or_imm5(&self, cursor: &mut OperandCursor) -> Result<AddAndOperand, AssemblyError> {
        match cursor.peek() {
            Some(Token::Register(_)) => Ok(AddAndOperand::Register(cursor.expect_register()?)),
            _ => Ok(AddAndOperand::Imm5(cursor.expect_immediate_in(-16, 15)?)),
        }
    }
}
