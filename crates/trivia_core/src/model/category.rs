//! Category domain model.
//!
//! Categories are read-only reference data seeded by migrations.

use serde::{Deserialize, Serialize};

/// Store-assigned category identifier.
pub type CategoryId = i64;

/// Question category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Display name. Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub name: String,
}
