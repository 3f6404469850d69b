// Opaque identifier generation

use uuid::Uuid;

/// Fresh opaque identifier. Compared for equality only, never parsed.
pub(crate) fn generate() -> String {
    Uuid::new_v4().simple().to_string()
}
