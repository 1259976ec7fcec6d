//! Error macros for taskhint

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::SuggestError::invalid_value($context, $value))
    };
}

/// Macro for creating request field errors
#[macro_export]
macro_rules! bail_field {
    ($field:expr, $reason:expr) => {
        return Err($crate::error::SuggestError::invalid_field($field, $reason))
    };
}
