#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty sequence
    ([]) => {
        $crate::Value::Seq(vec![])
    };

    // Handle non-empty sequence
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Seq(vec![$($crate::value!($elem)),*])
    };

    // Handle empty map
    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    // Handle non-empty map
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($key, $crate::value!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Fallback for any expression that serializes
    ($other:expr) => {{
        $crate::to_value(&$other).unwrap_or($crate::Value::Null)
    }};
}
