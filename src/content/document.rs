use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Legal pages that may be served. File names are derived from the variant,
/// so a request can only ever reach one of these files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum LegalDocument {
    Imprint,
    PrivacyPolicy,
}

impl LegalDocument {
    pub const EXTENSION: &'static str = "md";

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.as_ref(), Self::EXTENSION)
    }
}
