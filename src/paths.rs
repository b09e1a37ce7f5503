//! Human-readable locators into the validated value.
//!
//! Paths grow during recursion: `value`, `value.foo`, `value.foo[2]`.

pub(crate) const ROOT: &str = "value";

pub(crate) fn join_key(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

pub(crate) fn join_index(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}
