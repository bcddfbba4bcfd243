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

pub mod assembler;
pub mod ast;
pub mod errors;
pub mod file_reader;
pub mod parser;

use assembler::symbol_table::SymbolTable;
use errors::AssemblyError;
use log::info;

extern crate pest;
extern crate pest_derive;

/// The two-pass assembly pipeline: lex+parse the source into statements,
/// build the symbol table, then encode the final word stream.
pub fn assemble(source: &str) -> Result<Vec<u16>, AssemblyError> {
    let statements = parser::parse_source(source)?;

    info!("building symbol table ({} statements)", statements.len());
    let symbol_table = assembler::build_symbol_table(&statements)?;

    info!("encoding machine words ({} symbols)", symbol_table.len());
    let words = assembler::generate_machine_code(&statements, &symbol_table)?;

    Ok(words)
}

/// Pass 1 only, used by the `--symbols` CLI mode.
pub fn assemble_symbols(source: &str) -> Result<SymbolTable, AssemblyError> {
    let statements = parser::parse_source(source)?;
    assembler::build_symbol_table(&statements)
}
