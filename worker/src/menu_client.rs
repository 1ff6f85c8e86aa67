use std::{sync::Arc, env};
use anyhow::Result;
use reqwest::{self, Client};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct Menu {
    pub date: Option<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Deserialize, Debug)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
}

pub struct MenuClient {
    client: Client,
}

// LUNCH_MENU_URL points at the upstream menu feed
impl MenuClient {
    pub fn new() -> Result<Arc<Self>> {
        let client = reqwest::Client::new();
        let this = Self {
            client,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    pub async fn fetch_menu(&self) -> Result<Menu> {
        let menu_url = env::var("LUNCH_MENU_URL")?;
        let response = self.client.get(&menu_url)
            .send()
            .await?;
        let text = response.text().await?;
        info!("menu source response {:?}", text);
        let menu: Menu = serde_json::from_str(&text)?;
        Ok(menu)
    }
}

pub fn format_menu(menu: &Menu) -> String {
    let mut lines = Vec::new();
    match &menu.date {
        Some(date) => lines.push(format!("*Lunch menu for {}*", date)),
        None => lines.push("*Today's lunch menu*".to_string()),
    }
    if menu.items.is_empty() {
        lines.push("Nothing listed today.".to_string());
    }
    for item in &menu.items {
        match &item.description {
            Some(description) => lines.push(format!("- {}: {}", item.name, description)),
            None => lines.push(format!("- {}", item.name)),
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_menu_feed() {
        let body = r#"{
            "date": "2024-03-01",
            "items": [
                { "name": "Miso ramen", "description": "with soft-boiled egg" },
                { "name": "Onigiri" }
            ]
        }"#;
        let menu: Menu = serde_json::from_str(body).unwrap();
        assert_eq!(menu.date.as_deref(), Some("2024-03-01"));
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[1].name, "Onigiri");
        assert!(menu.items[1].description.is_none());
    }

    #[test]
    fn formats_dated_menu() {
        let menu = Menu {
            date: Some("2024-03-01".into()),
            items: vec![
                MenuItem { name: "Miso ramen".into(), description: Some("with soft-boiled egg".into()) },
                MenuItem { name: "Onigiri".into(), description: None },
            ],
        };
        let text = format_menu(&menu);
        assert_eq!(text, "*Lunch menu for 2024-03-01*\n- Miso ramen: with soft-boiled egg\n- Onigiri");
    }

    #[test]
    fn formats_empty_menu() {
        let menu = Menu {
            date: None,
            items: vec![],
        };
        let text = format_menu(&menu);
        assert_eq!(text, "*Today's lunch menu*\nNothing listed today.");
    }
}
