pub(crate) mod natord;
pub(crate) mod scan;
