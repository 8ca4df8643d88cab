//! Domain layer constants

/// Type names the container never treats as identifiers.
///
/// A parameter declared with one of these types must be supplied explicitly,
/// injected by identifier, or carry a default.
pub const BUILTIN_TYPE_NAMES: &[&str] = &[
    "bool", "char", "str", "&str", "String", "i8", "i16", "i32", "i64", "i128", "isize", "u8",
    "u16", "u32", "u64", "u128", "usize", "f32", "f64", "()", "Vec", "Option", "HashMap",
];
