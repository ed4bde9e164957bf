use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mapping of member attributes to Mailchimp merge tags and GBX profile fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeMap {
    #[serde(rename = "MERGE_FIELDS", default)]
    pub merge_fields: BTreeMap<String, String>,
    #[serde(rename = "GBX_PROFILE_FIELDS", default)]
    pub gbx_profile_fields: BTreeMap<String, String>,
}

impl MergeMap {
    pub fn section(&self, section: Section) -> &BTreeMap<String, String> {
        match section {
            Section::MergeFields => &self.merge_fields,
            Section::GbxProfileFields => &self.gbx_profile_fields,
        }
    }

    fn section_mut(&mut self, section: Section) -> &mut BTreeMap<String, String> {
        match section {
            Section::MergeFields => &mut self.merge_fields,
            Section::GbxProfileFields => &mut self.gbx_profile_fields,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.merge_fields.is_empty() && self.gbx_profile_fields.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    MergeFields,
    GbxProfileFields,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::MergeFields, Section::GbxProfileFields];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::MergeFields => "MERGE_FIELDS",
            Section::GbxProfileFields => "GBX_PROFILE_FIELDS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|section| section.as_str() == s)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One text input of the editor. The control name is `section:key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

impl FormField {
    pub fn section(&self) -> Option<Section> {
        parse_control_name(&self.name).map(|(section, _)| section)
    }

    pub fn key(&self) -> &str {
        self.name
            .split_once(':')
            .map(|(_, key)| key)
            .unwrap_or(&self.name)
    }
}

/// Splits a control name at the first `:` into section and key.
pub fn parse_control_name(name: &str) -> Option<(Section, &str)> {
    let (section, key) = name.split_once(':')?;
    Some((Section::parse(section)?, key))
}

/// Editable form built from a fetched [`MergeMap`].
///
/// The form owns the only copy of the values; a submission is rebuilt from
/// the control names and their current contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeMapForm {
    fields: Vec<FormField>,
}

impl MergeMapForm {
    pub fn from_map(map: MergeMap) -> Self {
        let mut fields = Vec::new();
        for section in Section::ALL {
            for (key, value) in map.section(section) {
                fields.push(FormField {
                    name: format!("{}:{}", section, key),
                    value: value.clone(),
                });
            }
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn value_mut(&mut self, index: usize) -> Option<&mut String> {
        self.fields.get_mut(index).map(|field| &mut field.value)
    }

    /// Sets the value of the control named `name`. Returns false if no such control exists.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Rebuilds the two-section structure from the controls, trimming every value.
    pub fn submission(&self) -> MergeMap {
        let mut map = MergeMap::default();
        for field in &self.fields {
            if let Some((section, key)) = parse_control_name(&field.name) {
                map.section_mut(section)
                    .insert(key.to_string(), field.value.trim().to_string());
            }
        }
        map
    }
}

/// Progress of a merge-map save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Rejected(u16),
    Failed,
}

impl SaveStatus {
    pub fn label(&self) -> String {
        match self {
            SaveStatus::Idle => String::new(),
            SaveStatus::Saving => "Saving...".to_string(),
            SaveStatus::Saved => "✅ Saved".to_string(),
            SaveStatus::Rejected(code) => format!("❌ Save failed ({})", code),
            SaveStatus::Failed => "❌ Failed to save".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_name_splits_at_first_colon() {
        assert_eq!(
            parse_control_name("MERGE_FIELDS:first_name"),
            Some((Section::MergeFields, "first_name"))
        );
        assert_eq!(
            parse_control_name("GBX_PROFILE_FIELDS:a:b"),
            Some((Section::GbxProfileFields, "a:b"))
        );
        assert_eq!(parse_control_name("OTHER:key"), None);
        assert_eq!(parse_control_name("no-colon"), None);
    }

    #[test]
    fn test_missing_section_deserializes_empty() {
        let map: MergeMap = serde_json::from_str(r#"{"MERGE_FIELDS": {"a": "A"}}"#).unwrap();
        assert_eq!(map.merge_fields.len(), 1);
        assert!(map.gbx_profile_fields.is_empty());
    }
}
