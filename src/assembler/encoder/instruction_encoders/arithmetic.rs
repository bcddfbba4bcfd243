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
use crate::ast::{AddAndOperand, Register};
use crate::errors::AssemblyError;

impl<'a> Encoder<'a> {
    pub fn encode_add(
        self,
        dr: Register,
        sr1: Register,
        sr2_or_imm: &AddAndOperand,
    ) -> Result<u16, AssemblyError> {
        self.encode_add_and(ADD_OPCODE, dr, sr1, sr2_or_imm)
    }

    pub fn encode_and(
        self,
        dr: Register,
        sr1: Register,
        sr2_or_imm: &AddAndOperand,
    ) -> Result<u16, AssemblyError> {
        self.encode_add_and(AND_OPCODE, dr, sr1, sr2_or_imm)
    }

    fn encode_add_and(
        self,
        opcode: u16,
        dr: Register,
        sr1: Register,
        sr2_or_imm: &AddAndOperand,
    ) -> Result<u16, AssemblyError> {
        let dr = encode_register_operand(dr);
        let sr1 = encode_register_operand(sr1);
        let word = (opcode << 12) | (dr << 9) | (sr1 << 6);
        match sr2_or_imm {
            AddAndOperand::Register(sr2) => Ok(word | encode_register_operand(*sr2)),
            AddAndOperand::Imm5(imm) => {
                let imm5 = pack_signed(*imm, 5, self.line_num)?;
                Ok(word | (1 << 5) | imm5)
            }
        }
    }

    pub fn encode_not(self, dr: Register, sr: Register) -> u16 {
        let dr = encode_register_operand(dr);
        let sr = encode_register_operand(sr);
        // the low six bits of NOT are fixed at 1, distinguishing it from a
        // hypothetical unused opcode-1001 encoding
        (NOT_OPCODE << 12) | (dr << 9) | (sr << 6) | 0b111111
    }
}
