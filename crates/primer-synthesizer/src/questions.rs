//! Question bank - business questions per category
//!
//! Templates may contain a `{business_type}` placeholder which is filled from
//! [`BUSINESS_TYPES`].

use primer_domain::QuestionCategory;

/// Placeholder substituted with a business type
pub const BUSINESS_TYPE_PLACEHOLDER: &str = "{business_type}";

/// Kinds of business a question can be about
pub const BUSINESS_TYPES: [&str; 18] = [
    "business",
    "store",
    "shop",
    "company",
    "online business",
    "small business",
    "startup",
    "boutique",
    "service business",
    "consulting business",
    "agency",
    "restaurant",
    "cafe",
    "bakery",
    "salon",
    "spa",
    "gym",
    "studio",
];

/// Question templates for a category
pub fn templates_for(category: QuestionCategory) -> &'static [&'static str] {
    match category {
        QuestionCategory::Growth => &GROWTH,
        QuestionCategory::Customers => &CUSTOMERS,
        QuestionCategory::Sales => &SALES,
        QuestionCategory::Marketing => &MARKETING,
        QuestionCategory::SocialMedia => &SOCIAL_MEDIA,
        QuestionCategory::Advertising => &ADVERTISING,
        QuestionCategory::CustomerService => &CUSTOMER_SERVICE,
        QuestionCategory::Retention => &RETENTION,
        QuestionCategory::Organization => &ORGANIZATION,
        QuestionCategory::Efficiency => &EFFICIENCY,
        QuestionCategory::Branding => &BRANDING,
        QuestionCategory::Competition => &COMPETITION,
        QuestionCategory::Pricing => &PRICING,
        QuestionCategory::Inventory => &INVENTORY,
        QuestionCategory::Shipping => &SHIPPING,
        QuestionCategory::Payments => &PAYMENTS,
        QuestionCategory::Website => &WEBSITE,
        QuestionCategory::Email => &EMAIL,
        QuestionCategory::Crm => &CRM,
        QuestionCategory::Hiring => &HIRING,
        QuestionCategory::Workload => &WORKLOAD,
        QuestionCategory::Products => &PRODUCTS,
        QuestionCategory::Promotions => &PROMOTIONS,
    }
}

/// Whether a template needs a business type
pub fn has_placeholder(template: &str) -> bool {
    template.contains(BUSINESS_TYPE_PLACEHOLDER)
}

/// Fill the business type placeholder
pub fn fill(template: &str, business_type: &str) -> String {
    template.replace(BUSINESS_TYPE_PLACEHOLDER, business_type)
}

/// Total number of question templates across all categories
pub fn template_count() -> usize {
    QuestionCategory::ALL
        .iter()
        .map(|c| templates_for(*c).len())
        .sum()
}

const GROWTH: [&str; 10] = [
    "How do I grow my {business_type}?",
    "What's the best way to expand my {business_type}?",
    "How can I scale my {business_type}?",
    "I want to grow my {business_type} faster",
    "How do I take my {business_type} to the next level?",
    "What helps a {business_type} grow?",
    "I need growth strategies for my {business_type}",
    "How can I develop my {business_type}?",
    "What's the secret to growing a {business_type}?",
    "How do I accelerate growth in my {business_type}?",
];

const CUSTOMERS: [&str; 10] = [
    "How do I get more customers for my {business_type}?",
    "How can I attract customers to my {business_type}?",
    "What's the best way to find customers?",
    "I need more clients for my {business_type}",
    "How do I reach potential customers?",
    "Where can I find customers?",
    "How do I get people to buy from my {business_type}?",
    "What attracts customers?",
    "How can I bring in new customers?",
    "I want more people to know about my {business_type}",
];

const SALES: [&str; 10] = [
    "How do I increase sales?",
    "How can I sell more products?",
    "What boosts sales?",
    "I need to make more money",
    "How do I improve my sales numbers?",
    "What's the best way to close deals?",
    "How can I convert leads into sales?",
    "I want higher revenue",
    "How do I sell more effectively?",
    "What increases conversion rates?",
];

const MARKETING: [&str; 10] = [
    "How do I market my {business_type}?",
    "What's the best marketing strategy?",
    "How can I promote my {business_type}?",
    "I need marketing ideas",
    "How do I advertise my {business_type}?",
    "What's good for marketing?",
    "How can I get the word out?",
    "I want better marketing results",
    "How do I create a marketing plan?",
    "What marketing channels should I use?",
];

const SOCIAL_MEDIA: [&str; 10] = [
    "Should I use social media for my {business_type}?",
    "How do I grow my social media following?",
    "What social media platforms are best?",
    "I need help with social media marketing",
    "How do I get more followers?",
    "Should I hire a social media manager?",
    "How often should I post on social media?",
    "What should I post on social media?",
    "How do I engage on social media?",
    "I want more social media engagement",
];

const ADVERTISING: [&str; 10] = [
    "Should I run ads for my {business_type}?",
    "What's the best advertising platform?",
    "How much should I spend on ads?",
    "Where should I advertise?",
    "Are Facebook ads worth it?",
    "Should I use Google Ads?",
    "I need affordable advertising",
    "How do I create effective ads?",
    "What type of ads work best?",
    "How do I target my ads?",
];

const CUSTOMER_SERVICE: [&str; 10] = [
    "How do I improve customer service?",
    "How can I respond to customers faster?",
    "What makes good customer service?",
    "I need to handle customer questions better",
    "How do I keep customers happy?",
    "What's the best way to support customers?",
    "How can I reduce response time?",
    "I want better customer satisfaction",
    "How do I handle customer complaints?",
    "What improves the customer experience?",
];

const RETENTION: [&str; 10] = [
    "How do I keep customers coming back?",
    "What builds customer loyalty?",
    "How can I reduce customer churn?",
    "I want repeat customers",
    "How do I create loyal customers?",
    "What makes customers return?",
    "How can I improve retention?",
    "I need customer loyalty strategies",
    "How do I turn customers into regulars?",
    "What keeps customers engaged?",
];

const ORGANIZATION: [&str; 10] = [
    "How do I stay organized?",
    "I'm overwhelmed with my {business_type}",
    "How can I manage my workload?",
    "I need better organization",
    "How do I track everything?",
    "What helps with organization?",
    "I'm drowning in tasks",
    "How can I be more efficient?",
    "How do I manage my time better?",
    "I need productivity tips",
];

const EFFICIENCY: [&str; 10] = [
    "How can I work more efficiently?",
    "What saves time in business?",
    "I need to be more productive",
    "How do I streamline operations?",
    "What improves efficiency?",
    "I want to work smarter not harder",
    "How can I automate my {business_type}?",
    "What tools save time?",
    "How do I reduce manual work?",
    "I need efficiency improvements",
];

const BRANDING: [&str; 10] = [
    "How do I build my brand?",
    "What makes a strong brand?",
    "I need help with branding",
    "How can I stand out from competitors?",
    "What's good for brand awareness?",
    "How do I create brand identity?",
    "I want a better brand image",
    "How do I make my brand memorable?",
    "What builds brand recognition?",
    "How can I improve my brand?",
];

const COMPETITION: [&str; 10] = [
    "How do I compete with bigger companies?",
    "What gives me a competitive advantage?",
    "I'm losing to competitors",
    "How can I stand out?",
    "What makes me different?",
    "How do I beat the competition?",
    "I need a competitive edge",
    "How can I differentiate my {business_type}?",
    "What do I do about competitors?",
    "How do I stay competitive?",
];

const PRICING: [&str; 10] = [
    "How should I price my products?",
    "What's the right pricing strategy?",
    "I'm not sure how to price",
    "Should I lower my prices?",
    "How do I price competitively?",
    "What's a fair price?",
    "I need pricing help",
    "How can I increase prices?",
    "Should I offer discounts?",
    "What pricing works best?",
];

const INVENTORY: [&str; 10] = [
    "How do I manage inventory?",
    "I'm running out of stock",
    "How can I track inventory better?",
    "What's good for inventory management?",
    "I need inventory help",
    "How do I prevent stockouts?",
    "How can I organize my inventory?",
    "I have too much inventory",
    "What helps with stock tracking?",
    "How do I manage products?",
];

const SHIPPING: [&str; 10] = [
    "How do I handle shipping?",
    "What's the best shipping method?",
    "I need shipping solutions",
    "How can I offer free shipping?",
    "What do I do about shipping costs?",
    "How do I ship products?",
    "I need delivery help",
    "What's good for shipping?",
    "How can I improve delivery?",
    "Should I offer local delivery?",
];

const PAYMENTS: [&str; 10] = [
    "How do I accept payments?",
    "What payment methods should I offer?",
    "I need payment solutions",
    "How can I get paid faster?",
    "What's the best payment processor?",
    "Should I accept credit cards?",
    "How do I handle online payments?",
    "I want easier payment collection",
    "What payment options are best?",
    "How can I process payments?",
];

const WEBSITE: [&str; 10] = [
    "Do I need a website?",
    "Should I build a website?",
    "What's the best website builder?",
    "I need an online presence",
    "How do I create a website?",
    "Should I hire a web developer?",
    "What makes a good website?",
    "I want to sell online",
    "Do I need an ecommerce site?",
    "How much does a website cost?",
];

const EMAIL: [&str; 10] = [
    "Should I use email marketing?",
    "What's the best email tool?",
    "How do I build an email list?",
    "I need email marketing help",
    "Should I send newsletters?",
    "How often should I email customers?",
    "What's a good email platform?",
    "I want to start email campaigns",
    "How do I get email addresses?",
    "Should I use Mailchimp?",
];

const CRM: [&str; 10] = [
    "Do I need a CRM?",
    "What's the best CRM system?",
    "How do I manage customer relationships?",
    "I need CRM help",
    "Should I get CRM software?",
    "What CRM do you recommend?",
    "How do I track customer data?",
    "I want better customer management",
    "What's a simple CRM?",
    "Do I need customer management software?",
];

const HIRING: [&str; 10] = [
    "Should I hire employees?",
    "How do I find good employees?",
    "I need help hiring",
    "Should I hire a virtual assistant?",
    "How many employees do I need?",
    "What do I pay employees?",
    "I can't afford to hire",
    "Should I outsource?",
    "How do I find freelancers?",
    "I need staff but have no budget",
];

const WORKLOAD: [&str; 10] = [
    "I'm working too much",
    "How do I reduce my workload?",
    "I'm burned out",
    "I can't keep up with demand",
    "How do I manage everything myself?",
    "I need help but can't hire",
    "I'm working 80 hours a week",
    "How do I get time back?",
    "I'm doing everything myself",
    "I need work-life balance",
];

const PRODUCTS: [&str; 10] = [
    "How do I showcase products?",
    "What's the best way to display items?",
    "I need product presentation help",
    "How can I feature my products?",
    "What shows products best?",
    "How do I create a product catalog?",
    "I want to display my inventory",
    "How can I show what I sell?",
    "What's good for product display?",
    "How do I present my offerings?",
];

const PROMOTIONS: [&str; 10] = [
    "Should I run promotions?",
    "What type of promotions work?",
    "I need promotion ideas",
    "How do I create a sale?",
    "Should I offer discounts?",
    "What promotions attract customers?",
    "I want to run a special offer",
    "How often should I promote?",
    "What's a good promotion strategy?",
    "How do I announce promotions?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_ten_templates() {
        for category in QuestionCategory::ALL {
            assert_eq!(templates_for(category).len(), 10, "{}", category);
        }
        assert_eq!(template_count(), 230);
    }

    #[test]
    fn test_fill_replaces_placeholder() {
        let question = fill("How do I grow my {business_type}?", "bakery");
        assert_eq!(question, "How do I grow my bakery?");
        assert!(!has_placeholder(&question));
    }

    #[test]
    fn test_fill_without_placeholder_is_identity() {
        assert_eq!(fill("How do I increase sales?", "gym"), "How do I increase sales?");
    }

    #[test]
    fn test_templates_are_non_empty() {
        for category in QuestionCategory::ALL {
            for template in templates_for(category) {
                assert!(!template.trim().is_empty());
            }
        }
    }
}
