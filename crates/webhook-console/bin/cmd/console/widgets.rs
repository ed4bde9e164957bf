pub(crate) mod formatters;
pub(crate) mod pagination;
