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

use crate::ast::{BrFlags, Instruction};
use crate::errors::AssemblyError;
use crate::parser::ast_builder::{AstBuilder, OperandCursor};

/// Recognizes BR with any suffix the lexer could have produced (n?z?p?, in
/// that order) and returns its condition flags. An empty suffix means nzp.
pub fn br_flags(mnemonic: &str) -> Option<BrFlags> {
    let suffix = mnemonic.strip_prefix("BR")?;
    if suffix.is_empty() {
        return Some(BrFlags::nzp());
    }
    let mut chars = suffix.chars();
    let mut n = false;
    let mut z = false;
    let mut p = false;
    let mut next = chars.next();
    if next == Some('N') {
        n = true;
        next = chars.next();
    }
    if next == Some('Z') {
        z = true;
        next = chars.next();
    }
    if next == Some('P') {
        p = true;
        next = chars.next();
    }
    if next.is_some() {
        return None;
    }
    Some(BrFlags { n, z, p })
}

impl<'a> AstBuilder<'a> {
    pub(super) fn build_br(
        &self,
        flags: BrFlags,
        cursor: &mut OperandCursor,
    ) -> Result<Instruction, AssemblyError> {
        let target = cursor.expect_label()?;
        Ok(Instruction::Br { flags, target })
    }

    pub(super) fn build_jmp(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let base_r = cursor.expect_register()?;
        Ok(Instruction::Jmp { base_r })
    }

    pub(super) fn build_jsrr(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let base_r = cursor.expect_register()?;
        Ok(Instruction::Jsrr { base_r })
    }

    pub(super) fn build_jsr(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let target = cursor.expect_label()?;
        Ok(Instruction::Jsr { target })
    }

    pub(super) fn build_trap(&self, cursor: &mut OperandCursor) -> Result<Instruction, AssemblyError> {
        let trapvect8 = cursor.expect_immediate_in(0, 255)? as u32;
        Ok(Instruction::Trap { trapvect8 })
    }
}
