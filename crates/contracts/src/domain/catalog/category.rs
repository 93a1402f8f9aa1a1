use crate::domain::catalog::user::UserId;
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u32);

impl CategoryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl EntityId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid category id: {}", e))
    }
}

// ============================================================================
// Entity
// ============================================================================

/// Категория товаров. Каждая категория принадлежит одному пользователю.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: UserId,
}

impl Category {
    /// Подпись категории в таблице: "{icon} - {title}"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}
