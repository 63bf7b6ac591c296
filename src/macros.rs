//! The [`rjson!`](crate::rjson) macro for building documents inline.
//!
//! `null`, `true` and `false` map to their RJSON kinds, `[...]` builds an array
//! and `{ "key": value }` builds an object. Anything else is converted through
//! [`to_value`](crate::to_value); expressions with no RJSON encoding become `null`.
//!
//! There is no literal for Void. Containers cannot hold one anyway.

#[macro_export]
macro_rules! rjson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::True
    };

    (false) => {
        $crate::Value::False
    };

    ([]) => {
        $crate::Value::array()
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::from(vec![$($crate::rjson!($elem)),*])
    };

    ({}) => {
        $crate::Value::object()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ObjectMap::new();
        $(
            object.set($key, $crate::rjson!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($s:expr) => {{
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    }};
}
