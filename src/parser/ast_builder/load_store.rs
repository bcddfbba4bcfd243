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

use crate::ast::Instruction;
use crate::errors::AssemblyError;
use crate::parser::ast_builder::{AstBuilder, OperandCursor};

impl<'a> AstBuilder<'a> {
    pub(super) fn build_ld(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let label = cursor.expect_label()?;
        Ok(Instruction::Ld { dr, label })
    }

    pub(super) fn build_ldi(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let label = cursor.expect_label()?;
        Ok(Instruction::Ldi { dr, label })
    }

    pub(super) fn build_lea(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let label = cursor.expect_label()?;
        Ok(Instruction::Lea { dr, label })
    }

    pub(super) fn build_st(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let sr = cursor.expect_register()?;
        let label = cursor.expect_label()?;
        Ok(Instruction::St { sr, label })
    }

    pub(super) fn build_sti(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let sr = cursor.expect_register()?;
        let label = cursor.expect_label()?;
        Ok(Instruction::Sti { sr, label })
    }

    pub(super) fn build_ldr(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let dr = cursor.expect_register()?;
        let base_r = cursor.expect_register()?;
        let offset6 = cursor.expect_immediate_in(-32, 31)?;
        Ok(Instruction::Ldr { dr, base_r, offset6 })
    }

    pub(super) fn build_str(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let sr = cursor.expect_register()?;
        let base_r = cursor.expect_register()?;
        let offset6 = cursor.expect_immediate_in(-32, 31)?;
        Ok(Instruction::Str { sr, base_r, offset6 })
    }
}
