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

use crate::assembler::encoder::Encoder;
use crate::assembler::encoder::constants::*;
use crate::assembler::encoder::utility_functions::*;
use crate::ast::Register;
use crate::errors::AssemblyError;

impl<'a> Encoder<'a> {
    pub fn encode_ld(self, dr: Register, label: &str) -> Result<u16, AssemblyError> {
        self.encode_pc_relative(LD_OPCODE, dr, label)
    }

    pub fn encode_ldi(self, dr: Register, label: &str) -> Result<u16, AssemblyError> {
        self.encode_pc_relative(LDI_OPCODE, dr, label)
    }

    pub fn encode_lea(self, dr: Register, label: &str) -> Result<u16, AssemblyError> {
        self.encode_pc_relative(LEA_OPCODE, dr, label)
    }

    pub fn encode_st(self, sr: Register, label: &str) -> Result<u16, AssemblyError> {
        self.encode_pc_relative(ST_OPCODE, sr, label)
    }

    pub fn encode_sti(self, sr: Register, label: &str) -> Result<u16, AssemblyError> {
        self.encode_pc_relative(STI_OPCODE, sr, label)
    }

    fn encode_pc_relative(self, opcode: u16, dr_or_sr: Register, label: &str) -> Result<u16, AssemblyError> {
        let addr = crate::assembler::symbol_table::get_symbol(self.symbol_table, label, self.line_num)?;
        let offset9 = pc_relative_offset(addr, self.location_counter, 9, self.line_num)?;
        Ok((opcode << 12) | (encode_register_operand(dr_or_sr) << 9) | offset9)
    }

    pub fn encode_ldr(self, dr: Register, base_r: Register, offset6: i32) -> Result<u16, AssemblyError> {
        self.encode_base_offset(LDR_OPCODE, dr, base_r, offset6)
    }

    pub fn encode_str(self, sr: Register, base_r: Register, offset6: i32) -> Result<u16, AssemblyError> {
        self.encode_base_offset(STR_OPCODE, sr, base_r, offset6)
    }

    fn encode_base_offset(
        self,
        opcode: u16,
        dr_or_sr: Register,
        base_r: Register,
        offset6: i32,
    ) -> Result<u16, AssemblyError> {
        let offset = pack_signed(offset6, 6, self.line_num)?;
        Ok((opcode << 12)
            | (encode_register_operand(dr_or_sr) << 9)
            | (encode_register_operand(base_r) << 6)
            | offset)
    }
}

// .STRINGZ packs two characters per word, high byte first, mirroring the
// LC-3 simulator's memory image format. An odd-length string's last
// character shares its word with the null terminator's high-zero byte; an
// even-length string gets one extra all-zero terminator word.
pub fn encode_stringz(s: &str) -> Vec<u16> {
    let bytes = s.as_bytes();
    let mut words = Vec::with_capacity(bytes.len() / 2 + 1);
    let mut i = 0;
    while bytes.len() - i >= 2 {
        words.push((bytes[i] as u16) << 8 | bytes[i + 1] as u16);
        i += 2;
    }
    if i == bytes.len() {
        words.push(0);
    } else {
        words.push((bytes[i] as u16) << 8);
    }
    words
}
