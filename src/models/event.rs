use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SmelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    General,
    School,
    Adult,
    Child,
    Popular,
}

impl Category {
    /// Order offered by the category selector.
    pub const ALL: [Category; 5] = [
        Category::General,
        Category::School,
        Category::Adult,
        Category::Child,
        Category::Popular,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "Geral",
            Category::School => "Escolar",
            Category::Adult => "Adulto",
            Category::Child => "Infantil",
            Category::Popular => "Popular",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SmelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "geral" | "general" => Ok(Category::General),
            "escolar" | "school" => Ok(Category::School),
            "adulto" | "adult" => Ok(Category::Adult),
            "infantil" | "child" => Ok(Category::Child),
            "popular" => Ok(Category::Popular),
            other => Err(SmelError::InvalidInput(format!("Unknown category '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub venue: String,
    /// ISO-8601 `YYYY-MM-DD`.
    pub date: String,
    pub category: Category,
}

impl Event {
    pub fn new(id: u32, name: &str, venue: &str, date: &str, category: Category) -> Self {
        Self {
            id,
            name: name.to_string(),
            venue: venue.to_string(),
            date: date.to_string(),
            category,
        }
    }
}

/// Events restored by the "restore defaults" action.
pub fn default_events() -> Vec<Event> {
    vec![
        Event::new(
            1,
            "Campeonato Municipal de Futebol",
            "Estádio Central",
            "2025-06-15",
            Category::Adult,
        ),
        Event::new(
            2,
            "Circuito Escolar de Atletismo",
            "Parque das Águas",
            "2025-07-20",
            Category::School,
        ),
    ]
}
