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

use crate::ast::Register;
use crate::errors::AssemblyError;

pub fn encode_register_operand(reg: Register) -> u16 {
    reg.index() as u16
}

// Packs a signed value into the low `bits` bits of a word as two's
// complement, after checking it actually fits in that many bits.
pub fn pack_signed(value: i32, bits: u32, line_num: usize) -> Result<u16, AssemblyError> {
    let lo = -(1i32 << (bits - 1));
    let hi = (1i32 << (bits - 1)) - 1;
    if value < lo || value > hi {
        return Err(AssemblyError::EncodeError {
            line: line_num,
            reason: format!("value {value} does not fit in {bits} bits (range [{lo}, {hi}])"),
        });
    }
    let mask = (1u32 << bits) - 1;
    Ok((value as u32 & mask) as u16)
}

// The PC used for PC-relative addressing is the address of the instruction
// following the one being encoded, i.e. the location counter plus one.
pub fn pc_relative_offset(
    target: u16,
    location_counter: u16,
    bits: u32,
    line_num: usize,
) -> Result<u16, AssemblyError> {
    let pc = location_counter.wrapping_add(1) as i32;
    let offset = target as i32 - pc;
    pack_signed(offset, bits, line_num)
}
