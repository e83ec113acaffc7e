pub(crate) mod check;
pub(crate) mod fix;
pub(crate) mod templates;
