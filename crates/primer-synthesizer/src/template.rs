//! Response templates and the registry that validates them

use crate::error::SynthesizerError;
use primer_domain::TemplateFamily;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Number of numbered steps in every synthesized answer
pub const STEPS_PER_ANSWER: usize = 6;

/// Answer skeleton for one template family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseTemplate {
    /// Family this template answers
    pub family: TemplateFamily,

    /// What the answer helps with, e.g. "grow your business"
    pub goal_phrase: String,

    /// Candidate steps; six are drawn per answer
    pub feature_pool: Vec<String>,

    /// Closing sentence after "You can also"
    pub bonus_clause: String,
}

impl ResponseTemplate {
    /// Create a template from literals
    pub fn new(family: TemplateFamily, goal: &str, features: &[&str], bonus: &str) -> Self {
        Self {
            family,
            goal_phrase: goal.to_string(),
            feature_pool: features.iter().map(|f| f.to_string()).collect(),
            bonus_clause: bonus.to_string(),
        }
    }

    /// Check the template can always render a complete answer
    pub fn validate(&self) -> Result<(), SynthesizerError> {
        let invalid = |reason: String| SynthesizerError::InvalidTemplate {
            family: self.family.to_string(),
            reason,
        };

        if self.goal_phrase.trim().is_empty() {
            return Err(invalid("goal phrase is empty".to_string()));
        }
        if self.bonus_clause.trim().is_empty() {
            return Err(invalid("bonus clause is empty".to_string()));
        }
        if self.feature_pool.len() < STEPS_PER_ANSWER {
            return Err(invalid(format!(
                "feature pool has {} entries, needs at least {}",
                self.feature_pool.len(),
                STEPS_PER_ANSWER
            )));
        }

        let mut seen = HashSet::new();
        for feature in &self.feature_pool {
            if feature.trim().is_empty() {
                return Err(invalid("feature pool contains an empty entry".to_string()));
            }
            if !seen.insert(feature.as_str()) {
                return Err(invalid(format!("duplicate feature '{}'", feature)));
            }
        }
        Ok(())
    }
}

/// Validated templates keyed by family
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<TemplateFamily, ResponseTemplate>,
}

impl TemplateRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding one template for every family
    ///
    /// Builtins are registered like any other template, so a malformed one
    /// surfaces as [`SynthesizerError::InvalidTemplate`].
    pub fn builtin() -> Result<Self, SynthesizerError> {
        let mut registry = Self::new();
        for template in builtin_templates() {
            registry.register(template)?;
        }
        Ok(registry)
    }

    /// Validate and register a template, replacing any previous one for its family
    pub fn register(&mut self, template: ResponseTemplate) -> Result<(), SynthesizerError> {
        template.validate()?;
        debug!(
            "Registered template for '{}' with {} features",
            template.family,
            template.feature_pool.len()
        );
        self.templates.insert(template.family, template);
        Ok(())
    }

    /// Template for a family
    pub fn get(&self, family: TemplateFamily) -> Result<&ResponseTemplate, SynthesizerError> {
        self.templates
            .get(&family)
            .ok_or_else(|| SynthesizerError::MissingTemplate(family.to_string()))
    }

    /// Registered families
    pub fn families(&self) -> impl Iterator<Item = TemplateFamily> + '_ {
        self.templates.keys().copied()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn builtin_templates() -> Vec<ResponseTemplate> {
    vec![
        ResponseTemplate::new(
            TemplateFamily::Growth,
            "grow your business",
            &[
                "Run Click-to-WhatsApp ads on Facebook/Instagram to bring customers directly to your WhatsApp chat",
                "Share your WhatsApp Business link (wa.me/yournumber) everywhere - social media, website, business cards",
                "Set up a product catalog to showcase what you sell with photos and prices",
                "Use broadcast lists to send promotions and announcements to all customers at once",
                "Enable quick replies to respond to inquiries faster and close more sales",
                "Set up greeting messages to automatically welcome new customers",
            ],
            "use labels to organize customers by stage and check Statistics to track your growth!",
        ),
        ResponseTemplate::new(
            TemplateFamily::Customers,
            "get more customers",
            &[
                "Run Click-to-WhatsApp ads on Facebook and Instagram - people click and chat with you instantly",
                "Share your wa.me/yournumber link on all social media and your website",
                "Create an attractive product catalog so customers can browse your offerings",
                "Use broadcast lists to ask existing customers to share your business with friends",
                "Enable greeting messages with a first-time customer discount",
                "Post engaging content on WhatsApp Status daily to attract attention",
            ],
            "get verified with the green checkmark badge to build trust!",
        ),
        ResponseTemplate::new(
            TemplateFamily::Sales,
            "increase sales",
            &[
                "Set up a catalog with all your products, prices, and photos - customers browse and buy directly",
                "Send broadcast messages announcing flash sales and limited-time offers",
                "Use quick replies to send product information and pricing instantly",
                "Share customer testimonials on WhatsApp Status to build social proof",
                "Use labels to track interested customers and follow up with special offers",
                "Send personalized messages to customers who viewed but didn't buy",
            ],
            "enable away messages with your catalog link for 24/7 selling!",
        ),
        ResponseTemplate::new(
            TemplateFamily::Marketing,
            "market your business effectively",
            &[
                "Create a compelling product catalog with professional photos and descriptions",
                "Run Click-to-WhatsApp ads on Facebook/Instagram showing your best products",
                "Share your catalog on WhatsApp Status every single day",
                "Use broadcast lists to send marketing messages to your customer base",
                "Share your WhatsApp Business link (wa.me/yournumber) everywhere",
                "Enable a greeting message that promotes your catalog",
            ],
            "use quick replies to send promotional videos and offers!",
        ),
        ResponseTemplate::new(
            TemplateFamily::Organization,
            "stay organized",
            &[
                "Use labels to categorize customers (New Customer, Pending, Paid, Shipped, VIP)",
                "Filter your chats by label to quickly find specific conversations",
                "Set up away messages to communicate your business hours automatically",
                "Create quick replies for FAQs so you don't type the same answers repeatedly",
                "Check Statistics daily to track message volume and busy times",
                "Archive completed orders to keep your active chat list clean",
            ],
            "use WhatsApp Web on your computer for easier management!",
        ),
    ]
}
