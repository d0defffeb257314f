use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A registered electronics brand. The name is the unique key, compared
/// case-insensitively; everything else is descriptive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub revenue: f64,
    pub registered_at: DateTime<Utc>,
}

impl Brand {
    pub fn new(name: String, country: String, revenue: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            country,
            revenue,
            registered_at: Utc::now(),
        }
    }

    /// Case-insensitive match on the unique brand name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Brand: {}, Country: {}, Revenue: {}",
            self.name, self.country, self.revenue
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_match_ignores_case() {
        let brand = Brand::new("Acme".to_string(), "US".to_string(), 1000.0);

        assert!(brand.matches_name("acme"));
        assert!(brand.matches_name("ACME"));
        assert!(!brand.matches_name("Acme Corp"));
    }

    #[test]
    fn test_display_line() {
        let brand = Brand::new("Zed".to_string(), "UK".to_string(), 2000.0);

        assert_eq!(brand.to_string(), "Brand: Zed, Country: UK, Revenue: 2000");
    }
}
