//! Macros for reducing doc comment boilerplate.

/// Documents rejection of nested collections.
macro_rules! errors_nested_shape {
    () => {
        r"- `UnsupportedShape`: the input is a nested collection.\n"
    };
}
pub(crate) use errors_nested_shape;

/// Documents rejection of empty collections.
macro_rules! errors_empty_collection {
    () => {
        r"- `EmptyCollection`: the input is a flat collection without elements.\n"
    };
}
pub(crate) use errors_empty_collection;
