//! Construction macros for data and rule maps.
//!
//! # Examples
//!
//! ```
//! use verdict::{data_map, rules_map, is_valid};
//!
//! let data = data_map! { "cat" => "Nacho" };
//! let rules = rules_map! { "cat" => "required|min:3" };
//! assert!(is_valid(&data, &rules));
//! ```

/// Builds a [`DataMap`](crate::value::DataMap), converting each value with
/// [`Value::from`](crate::value::Value).
#[macro_export]
macro_rules! data_map {
    () => { $crate::value::DataMap::new() };
    ($($field:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::value::DataMap::new();
        $(
            map.insert(
                ::std::string::String::from($field),
                $crate::value::Value::from($value),
            );
        )+
        map
    }};
}

/// Builds a [`RulesMap`](crate::parser::RulesMap) of pipe-delimited rule
/// strings.
#[macro_export]
macro_rules! rules_map {
    () => { $crate::parser::RulesMap::new() };
    ($($field:expr => $rules:expr),+ $(,)?) => {{
        let mut map = $crate::parser::RulesMap::new();
        $(
            map.insert(
                ::std::string::String::from($field),
                ::std::string::String::from($rules),
            );
        )+
        map
    }};
}
