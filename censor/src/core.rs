// src/core.rs
pub mod redactor;
pub mod scanner;
pub mod word_list;
