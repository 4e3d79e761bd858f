use serde::{Deserialize, Deserializer, Serialize};

/// One documented enum, as found under `apiReference` on a detail page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumDescriptor {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub summary: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub code_samples: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub deprecation_message: String,
    #[serde(deserialize_with = "or_default")]
    pub items: Vec<EnumMember>,
}

/// A single value of an enum
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnumMember {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub summary: String,
    pub value: u32,
    #[serde(deserialize_with = "or_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "or_default")]
    pub deprecation_message: String,
}

impl EnumDescriptor {
    pub fn is_deprecated(&self) -> bool {
        !self.deprecation_message.is_empty()
    }

    /// The long description, if it adds anything over the summary
    pub fn extra_description(&self) -> Option<&str> {
        if self.description.is_empty() || self.description == self.summary {
            None
        } else {
            Some(&self.description)
        }
    }
}

impl EnumMember {
    pub fn is_deprecated(&self) -> bool {
        !self.deprecation_message.is_empty()
    }
}

/// Treats an explicit `null` like a missing field
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
