//! # bemforge HTML compiler
//!
//! Renders an element forest as indented HTML markup carrying BEM class
//! names.

mod compiler;

pub use compiler::{compile_to_html, compile_to_html_with, CompileOptions};

#[cfg(test)]
mod tests;
