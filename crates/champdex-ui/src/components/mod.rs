pub(crate) mod detail;
pub(crate) mod grid;
pub(crate) mod shell;
pub(crate) mod status;
