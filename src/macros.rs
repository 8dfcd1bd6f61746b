#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Rule`](crate::Rule) for a rewrite list.
///
/// `re:` rules compile their pattern once (through [`regex!`]) and may use
/// `${n}` group references in the replacement; `lit:` rules replace every
/// occurrence of a plain string.
#[macro_export]
macro_rules! rule {
    (name: $name:expr, re: $pat:literal => $rep:expr $(,)?) => {
        $crate::Rule::from_regex($name, $crate::regex!($pat).clone(), $rep)
    };
    (name: $name:expr, lit: $pat:expr => $rep:expr $(,)?) => {
        $crate::Rule::literal($name, $pat, $rep)
    };
}
