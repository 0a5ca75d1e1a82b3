//! Command implementations

pub mod compare;

pub mod doctor;

pub mod info;

pub mod parse;
