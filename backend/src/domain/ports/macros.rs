//! Helper macro for declaring port error enums.
//!
//! Every variant carries named fields; the macro derives `thiserror::Error`
//! and adds a snake-case constructor per variant whose parameters accept
//! anything convertible into the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct [`" $name "::" $variant "`]."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Query { message: String } => "query: {message}",
            Deadline { operation: String, millis: u64 } => "{operation} after {millis} ms",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(SamplePortError::query("boom").to_string(), "query: boom");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::deadline("list", 3000_u64);
        assert_eq!(
            err,
            SamplePortError::Deadline {
                operation: "list".to_owned(),
                millis: 3000
            }
        );
        assert_eq!(err.to_string(), "list after 3000 ms");
    }
}
