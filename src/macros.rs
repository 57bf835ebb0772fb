// src/macros.rs
//
// String shorthands used across the overlay code: `s!` for owned strings
// (form defaults, query fields, status text) and `join!` for gluing file
// names together without a format string.

/// `s!()` → empty `String`; `s!(x)` → `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices: `join!(DOWNLOAD_PREFIX, &stem, ".html")`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}
