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

use crate::errors::AssemblyError;
use std::collections::HashMap;

// The symbol table stores label names and the address of the word they
// label. LC-3 has a single flat 16-bit address space, so unlike a banked
// architecture there is no notion of a symbol being visible only from
// certain banks.
pub type SymbolTable = HashMap<String, u16>;

pub fn insert_label(
    symbol_table: &mut SymbolTable,
    label_name: String,
    address: u16,
    line_num: usize,
) -> Result<(), AssemblyError> {
    if symbol_table.contains_key(&label_name) {
        return Err(AssemblyError::SymbolError {
            line: line_num,
            reason: format!("label \"{label_name}\" is already defined"),
        });
    }
    symbol_table.insert(label_name, address);
    Ok(())
}

// Only called from pass 2, where an unresolved label is an encode-time
// failure rather than a symbol-table-construction failure.
pub fn get_symbol<'a>(
    symbol_table: &'a SymbolTable,
    label_name: &str,
    line_num: usize,
) -> Result<u16, AssemblyError> {
    symbol_table
        .get(label_name)
        .copied()
        .ok_or_else(|| AssemblyError::EncodeError {
            line: line_num,
            reason: format!("undefined label: {label_name}"),
        })
}
