use serde::{Deserialize, Serialize};

pub(crate) type MenuItemId = i32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    /// in minutes
    pub prep_time: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

impl MenuItem {
    /// Image url, treating the empty string the staff form submits as absent.
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Staff form payload, `id` is null when creating a new item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MenuItemDraft {
    pub id: Option<MenuItemId>,
    pub name: String,
    pub price: f64,
    pub prep_time: u32,
    pub category: String,
    pub image_url: Option<String>,
    pub available: bool,
}

impl From<MenuItem> for MenuItemDraft {
    fn from(item: MenuItem) -> Self {
        Self {
            id: Some(item.id),
            name: item.name,
            price: item.price,
            prep_time: item.prep_time,
            category: item.category,
            image_url: item.image_url,
            available: item.available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_defaults_to_true() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":3,"name":"Dosa","price":80.0,"prepTime":12,"category":"South Indian"}"#,
        )
        .unwrap();
        assert!(item.available);
        assert_eq!(item.image(), None);
    }

    #[test]
    fn draft_without_id_serializes_null() {
        let draft = MenuItemDraft {
            id: None,
            name: "Lassi".to_string(),
            price: 45.5,
            prep_time: 3,
            category: "Drinks".to_string(),
            image_url: None,
            available: true,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["id"].is_null());
        assert_eq!(json["prepTime"], 3);
    }
}
