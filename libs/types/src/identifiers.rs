//! Opaque wire identifiers.
//!
//! Every outgoing message carries a freshly generated [`MessageId`];
//! long-running tasks are tracked by [`TaskId`]. Inbound identifiers are
//! passed through unvalidated - the codec only carries them.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh, globally unique identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// The identifier exactly as it appears on the wire.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a single wire message.
    ///
    /// A response's `requestId` is the `MessageId` of the request it answers;
    /// the codec carries that value without checking the correlation.
    MessageId
);

opaque_id!(
    /// Identifier of a long-running task instance (command execution,
    /// playback, or streaming), assigned when the task is launched.
    TaskId
);
