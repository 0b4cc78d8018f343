use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LookupId;

/// One option of a dependent dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    pub id: LookupId,
    pub name: String,
}

impl LookupItem {
    pub fn new(id: LookupId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Build an item from a raw API row, trying the candidate keys in order.
    /// Rows without an id are not selectable and yield `None`.
    pub fn from_json(row: &Value, id_keys: &[&str], name_keys: &[&str]) -> Option<Self> {
        let id = id_keys
            .iter()
            .filter_map(|key| row.get(*key))
            .find_map(LookupId::from_json)?;

        let name = name_keys
            .iter()
            .filter_map(|key| row.get(*key))
            .find_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_default();

        Some(Self { id, name })
    }
}

/// Where the options of a reference field come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSource {
    /// Fetched from the collaborator on form mount
    Remote {
        path: &'static str,
        id_keys: &'static [&'static str],
        name_keys: &'static [&'static str],
    },
    /// Fixed list compiled into the console
    Static(&'static [(i64, &'static str)]),
}

impl LookupSource {
    pub fn remote_path(&self) -> Option<&'static str> {
        match self {
            LookupSource::Remote { path, .. } => Some(path),
            LookupSource::Static(_) => None,
        }
    }

    /// Turn fetched rows (or the static table) into a lookup list
    pub fn build(&self, rows: &[Value]) -> LookupList {
        match self {
            LookupSource::Remote {
                id_keys, name_keys, ..
            } => LookupList::new(
                rows.iter()
                    .filter_map(|row| LookupItem::from_json(row, id_keys, name_keys))
                    .collect(),
            ),
            LookupSource::Static(items) => LookupList::new(
                items
                    .iter()
                    .map(|(id, name)| LookupItem::new(LookupId::Int(*id), *name))
                    .collect(),
            ),
        }
    }
}

/// Ordered options of one reference field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupList {
    items: Vec<LookupItem>,
}

impl LookupList {
    pub fn new(items: Vec<LookupItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LookupItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &LookupId) -> Option<&LookupItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Display name for a raw form value; empty when blank or unmatched
    pub fn name_for(&self, raw: &str) -> String {
        LookupId::parse(raw)
            .and_then(|id| self.find(&id))
            .map(|item| item.name.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const GROUPS: LookupSource = LookupSource::Remote {
        path: "/api/groups",
        id_keys: &["GroupID", "_id"],
        name_keys: &["GroupName", "Name"],
    };

    #[test]
    fn test_name_for_matches_by_typed_id() {
        let list = LookupList::new(vec![
            LookupItem::new(LookupId::Int(1), "Urdu"),
            LookupItem::new(LookupId::Int(2), "English"),
        ]);
        assert_eq!(list.name_for("2"), "English");
        assert_eq!(list.name_for("9"), "");
        assert_eq!(list.name_for(""), "");
    }

    #[test]
    fn test_remote_source_uses_fallback_keys() {
        let rows = vec![
            json!({"GroupID": 1, "GroupName": "Naat"}),
            json!({"_id": "a1", "Name": "Manqabat"}),
            json!({"GroupName": "no id"}),
        ];
        let list = GROUPS.build(&rows);
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.name_for("1"), "Naat");
        assert_eq!(list.name_for("a1"), "Manqabat");
    }

    #[test]
    fn test_string_ids_from_api_match_numeric_selection() {
        let rows = vec![json!({"GroupID": "3", "GroupName": "Hamd"})];
        let list = GROUPS.build(&rows);
        assert_eq!(list.name_for("3"), "Hamd");
    }

    #[test]
    fn test_static_source_ignores_rows() {
        let source = LookupSource::Static(&[(1, "Urdu"), (2, "English")]);
        let list = source.build(&[json!({"GroupID": 5})]);
        assert_eq!(list.items().len(), 2);
        assert_eq!(source.remote_path(), None);
        assert_eq!(GROUPS.remote_path(), Some("/api/groups"));
    }
}
