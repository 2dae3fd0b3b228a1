//! Command line interface for the Apothecary search tool.

pub mod args;
pub mod commands;
pub mod output;
