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

use anyhow::{Context, Result};
use clap::{Parser as clap_parser, ValueEnum};
use lc3asm::file_reader::{AsmFileReader, FileReader};
use std::io::{Read as _, Write as _};
use std::path::PathBuf;

#[derive(clap_parser)]
#[clap(version = "0.1.0", author = "Connor Nolan")]
struct Opts {
    /// Assembly source file; omit to read from stdin.
    input: Option<PathBuf>,

    #[clap(short, long)]
    output: Option<PathBuf>,

    #[clap(long, value_enum)]
    format: Option<Format>,

    /// Print the symbol table instead of assembling.
    #[clap(long)]
    symbols: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Raw,
    Binascii,
    Hex,
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let source = read_source(&opts.input)?;

    if opts.symbols {
        let symbols = lc3asm::assemble_symbols(&source)?;
        let dump = render_symbols(&symbols);
        write_output(&opts.output, dump.as_bytes())?;
        return Ok(());
    }

    let words = lc3asm::assemble(&source)?;
    let format = opts
        .format
        .unwrap_or(if opts.output.is_some() { Format::Raw } else { Format::Binascii });
    let bytes = render_words(&words, format);
    write_output(&opts.output, &bytes)?;
    Ok(())
}

fn read_source(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) => AsmFileReader
            .read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render_words(words: &[u16], format: Format) -> Vec<u8> {
    match format {
        Format::Raw => words.iter().flat_map(|w| w.to_be_bytes()).collect(),
        Format::Binascii => words
            .iter()
            .flat_map(|w| format!("{w:016b}\n").into_bytes())
            .collect(),
        Format::Hex => words
            .iter()
            .flat_map(|w| format!("0x{w:04X}\n").into_bytes())
            .collect(),
    }
}

fn render_symbols(symbols: &lc3asm::assembler::symbol_table::SymbolTable) -> String {
    let mut entries: Vec<_> = symbols.iter().collect();
    entries.sort_by(|(name_a, addr_a), (name_b, addr_b)| addr_a.cmp(addr_b).then(name_a.cmp(name_b)));
    entries
        .into_iter()
        .map(|(name, addr)| format!("{name} 0x{addr:04X}\n"))
        .collect()
}

fn write_output(output: &Option<PathBuf>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, bytes)?;
        }
        None => {
            std::io::stdout().write_all(bytes)?;
        }
    }
    Ok(())
}
