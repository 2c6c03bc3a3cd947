//! Integration tests for the student record store and CLI

mod cli_contracts;
mod parse_contracts;
mod store_laws;
