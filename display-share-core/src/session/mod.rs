pub mod assemble;
pub mod share;
