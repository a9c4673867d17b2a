//! Colored key/value logging used when [`crate::transactions::SendTransactionConfig::debug_logs`]
//! is enabled.

use colored::Color;

/// Format a key/value pair with optional color overrides.
///
/// Requires the `colored::Colorize` trait to be in scope.
///
/// Examples, where `key_color` and `value_color` are `LogColor` values:
/// - fmt_kv!(key, value)
/// - fmt_kv!(key, value, key_color)
/// - fmt_kv!(key, value, key_color, value_color)
#[macro_export]
macro_rules! fmt_kv {
    ($key:expr, $value:expr $(,)?) => {
        $crate::fmt_kv!(
            $key,
            $value,
            $crate::LogColor::Highlight,
            $crate::LogColor::FadedGray
        )
    };
    ($key:expr, $value:expr, $key_color:expr $(,)?) => {
        $crate::fmt_kv!($key, $value, $key_color, $crate::LogColor::FadedGray)
    };
    ($key:expr, $value:expr, $key_color:expr, $value_color:expr $(,)?) => {{
        use ::colored::Colorize;
        let __k = ::std::string::ToString::to_string(&$key);
        let __v = ::std::string::ToString::to_string(&$value);
        ::std::format!(
            "{}: {}",
            __k.color(::colored::Color::from($key_color)),
            __v.color(::colored::Color::from($value_color))
        )
    }};
}

/// Prints a key/value pair with optional color overrides. Same arguments as [`fmt_kv!`].
#[macro_export]
macro_rules! print_kv {
    ($($arg:tt)*) => {
        ::std::println!("{}", $crate::fmt_kv!($($arg)*))
    };
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Error,
    Header,
    Info,
    FadedGray,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn fmt_divider() -> String { "--------------------------------------------------------------------------------".into() }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight  => Color::TrueColor { r: 255, g: 215, b: 87  },
                LogColor::Error      => Color::TrueColor { r: 255, g: 0,   b: 45  },
                LogColor::Header     => Color::TrueColor { r: 0,   g: 255, b: 0   },
                LogColor::Info       => Color::TrueColor { r: 0,   g: 95,  b: 255 },
                LogColor::FadedGray  => Color::TrueColor { r: 95,  g: 95,  b: 95  },
            }
        }
    }
}

pub use unformatted::*;
