#[macro_use]
extern crate log;

pub mod bits;
pub mod case;
pub mod gen;
pub mod input;
pub mod judge;
pub mod memory;
pub mod oracle;
pub mod seg_tree;
