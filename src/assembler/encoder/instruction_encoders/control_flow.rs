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
use crate::assembler::symbol_table::get_symbol;
use crate::ast::{BrFlags, Register};
use crate::errors::AssemblyError;

impl<'a> Encoder<'a> {
    pub fn encode_br(self, flags: BrFlags, target: &str) -> Result<u16, AssemblyError> {
        let addr = get_symbol(self.symbol_table, target, self.line_num)?;
        let offset9 = pc_relative_offset(addr, self.location_counter, 9, self.line_num)?;
        let ccc = ((flags.n as u16) << 2) | ((flags.z as u16) << 1) | (flags.p as u16);
        Ok((BR_OPCODE << 12) | (ccc << 9) | offset9)
    }

    pub fn encode_jmp(self, base_r: Register) -> u16 {
        (JMP_OPCODE << 12) | (encode_register_operand(base_r) << 6)
    }

    pub fn encode_ret(self) -> u16 {
        self.encode_jmp(Register(7))
    }

    pub fn encode_jsr(self, target: &str) -> Result<u16, AssemblyError> {
        let addr = get_symbol(self.symbol_table, target, self.line_num)?;
        let offset11 = pc_relative_offset(addr, self.location_counter, 11, self.line_num)?;
        Ok((JSR_OPCODE << 12) | JSR_MODE_BIT | offset11)
    }

    pub fn encode_jsrr(self, base_r: Register) -> u16 {
        (JSR_OPCODE << 12) | (encode_register_operand(base_r) << 6)
    }

    pub fn encode_rti(self) -> u16 {
        RTI_OPCODE << 12
    }

    pub fn encode_trap(self, trapvect8: u32) -> u16 {
        (TRAP_OPCODE << 12) | trapvect8 as u16
    }
}
