pub(crate) mod name;
