// campus-connect/campus-utils
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a newtype around `String` that is used as an opaque identifier.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Eq, PartialEq, Hash, Clone, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            pub fn into_inner(self) -> String {
                self.0
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::id_string!(SampleId);

    #[test]
    fn test_converts_from_and_into_strings() {
        let id = SampleId::from("abc-123");
        assert_eq!(id.as_ref(), "abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!("abc-123".parse::<SampleId>().unwrap(), id);
        assert_eq!(id.into_inner(), "abc-123".to_string());
    }

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::from("room-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"room-1\"");
        assert_eq!(
            serde_json::from_str::<SampleId>("\"room-1\"").unwrap(),
            SampleId::from("room-1")
        );
    }
}
