pub(crate) mod assemble;
pub(crate) mod encoder;
pub(crate) mod write;
