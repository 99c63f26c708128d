//! Question categories and the template families that answer them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Business question category a generated question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum QuestionCategory {
    Growth,
    Customers,
    Sales,
    Marketing,
    SocialMedia,
    Advertising,
    CustomerService,
    Retention,
    Organization,
    Efficiency,
    Branding,
    Competition,
    Pricing,
    Inventory,
    Shipping,
    Payments,
    Website,
    Email,
    Crm,
    Hiring,
    Workload,
    Products,
    Promotions,
}

impl QuestionCategory {
    /// Every category, in question-bank order
    pub const ALL: [QuestionCategory; 23] = [
        QuestionCategory::Growth,
        QuestionCategory::Customers,
        QuestionCategory::Sales,
        QuestionCategory::Marketing,
        QuestionCategory::SocialMedia,
        QuestionCategory::Advertising,
        QuestionCategory::CustomerService,
        QuestionCategory::Retention,
        QuestionCategory::Organization,
        QuestionCategory::Efficiency,
        QuestionCategory::Branding,
        QuestionCategory::Competition,
        QuestionCategory::Pricing,
        QuestionCategory::Inventory,
        QuestionCategory::Shipping,
        QuestionCategory::Payments,
        QuestionCategory::Website,
        QuestionCategory::Email,
        QuestionCategory::Crm,
        QuestionCategory::Hiring,
        QuestionCategory::Workload,
        QuestionCategory::Products,
        QuestionCategory::Promotions,
    ];

    /// Get the category label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Growth => "growth",
            QuestionCategory::Customers => "customers",
            QuestionCategory::Sales => "sales",
            QuestionCategory::Marketing => "marketing",
            QuestionCategory::SocialMedia => "social_media",
            QuestionCategory::Advertising => "advertising",
            QuestionCategory::CustomerService => "customer_service",
            QuestionCategory::Retention => "retention",
            QuestionCategory::Organization => "organization",
            QuestionCategory::Efficiency => "efficiency",
            QuestionCategory::Branding => "branding",
            QuestionCategory::Competition => "competition",
            QuestionCategory::Pricing => "pricing",
            QuestionCategory::Inventory => "inventory",
            QuestionCategory::Shipping => "shipping",
            QuestionCategory::Payments => "payments",
            QuestionCategory::Website => "website",
            QuestionCategory::Email => "email",
            QuestionCategory::Crm => "crm",
            QuestionCategory::Hiring => "hiring",
            QuestionCategory::Workload => "workload",
            QuestionCategory::Products => "products",
            QuestionCategory::Promotions => "promotions",
        }
    }

    /// Parse a category label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        QuestionCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
    }

    /// The template family that answers this category
    pub fn family(&self) -> TemplateFamily {
        use QuestionCategory::*;
        match self {
            Growth => TemplateFamily::Growth,
            Customers | Retention => TemplateFamily::Customers,
            Sales | Pricing | Payments | Products | Promotions => TemplateFamily::Sales,
            Marketing | SocialMedia | Advertising | Branding | Competition | Website | Email => {
                TemplateFamily::Marketing
            }
            CustomerService | Organization | Efficiency | Inventory | Shipping | Crm | Hiring
            | Workload => TemplateFamily::Organization,
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid question category: {}", s))
    }
}

/// Answer shape shared by several question categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum TemplateFamily {
    Growth,
    Customers,
    Sales,
    Marketing,
    Organization,
}

impl TemplateFamily {
    /// Every family
    pub const ALL: [TemplateFamily; 5] = [
        TemplateFamily::Growth,
        TemplateFamily::Customers,
        TemplateFamily::Sales,
        TemplateFamily::Marketing,
        TemplateFamily::Organization,
    ];

    /// Get the family label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateFamily::Growth => "growth",
            TemplateFamily::Customers => "customers",
            TemplateFamily::Sales => "sales",
            TemplateFamily::Marketing => "marketing",
            TemplateFamily::Organization => "organization",
        }
    }

    /// Categories answered by this family
    pub fn categories(&self) -> Vec<QuestionCategory> {
        QuestionCategory::ALL
            .into_iter()
            .filter(|c| c.family() == *self)
            .collect()
    }
}

impl fmt::Display for TemplateFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in QuestionCategory::ALL {
            assert_eq!(QuestionCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!("Social_Media".parse::<QuestionCategory>(), Ok(QuestionCategory::SocialMedia));
        assert!(QuestionCategory::parse("taxes").is_none());
    }

    #[test]
    fn test_family_mapping() {
        assert_eq!(QuestionCategory::Retention.family(), TemplateFamily::Customers);
        assert_eq!(QuestionCategory::Payments.family(), TemplateFamily::Sales);
        assert_eq!(QuestionCategory::Email.family(), TemplateFamily::Marketing);
        assert_eq!(QuestionCategory::Crm.family(), TemplateFamily::Organization);
        assert_eq!(QuestionCategory::Growth.family(), TemplateFamily::Growth);
    }

    #[test]
    fn test_every_family_is_used() {
        let total: usize = TemplateFamily::ALL.iter().map(|f| f.categories().len()).sum();
        assert_eq!(total, QuestionCategory::ALL.len());
        for family in TemplateFamily::ALL {
            assert!(!family.categories().is_empty(), "{}", family);
        }
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&QuestionCategory::CustomerService).unwrap();
        assert_eq!(json, "\"customer_service\"");
    }
}
