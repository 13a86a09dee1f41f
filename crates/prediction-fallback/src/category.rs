//! Keyword-based category classification

use crate::result::Category;

/// Ordered rule table. Earlier rows shadow later ones, so the priority
/// Dining > Shopping > Transportation > Entertainment > Banking > Groceries
/// must not be reordered.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Dining,
        &["starbucks", "coffee", "restaurant", "food", "cafe", "zomato", "swiggy"],
    ),
    (
        Category::Shopping,
        &["amazon", "flipkart", "shopping", "mall", "myntra"],
    ),
    (
        Category::Transportation,
        &["uber", "ola", "taxi", "petrol", "fuel", "metro", "bus"],
    ),
    (
        Category::Entertainment,
        &["netflix", "hotstar", "subscription", "movie", "spotify", "prime"],
    ),
    (
        Category::Banking,
        &["bank", "emi", "loan", "hdfc", "sbi", "icici", "axis"],
    ),
    (
        Category::Groceries,
        &["grocery", "bazaar", "mart", "supermarket", "bigbasket"],
    ),
    (
        Category::Utilities,
        &["electricity", "water bill", "recharge", "broadband", "wifi"],
    ),
    (
        Category::Healthcare,
        &["hospital", "doctor", "pharmacy", "medical", "apollo", "medicine"],
    ),
    (
        Category::Education,
        &["school", "college", "university", "course", "tuition"],
    ),
];

/// Map a free-text transaction description to exactly one category.
///
/// The text is lowercased and matched against the rule table in order;
/// the first rule with a substring hit anywhere in the text wins. An
/// empty or unmatched description yields `Category::Other`.
pub fn categorize(description: &str) -> Category {
    let text = description.to_lowercase();

    for (category, keywords) in RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_keywords() {
        assert_eq!(categorize("Starbucks Coffee Day"), Category::Dining);
        assert_eq!(categorize("STARBUCKS"), Category::Dining);
        assert_eq!(categorize("dinner at a restaurant"), Category::Dining);
    }

    #[test]
    fn test_each_category_reachable() {
        assert_eq!(categorize("Amazon order"), Category::Shopping);
        assert_eq!(categorize("Uber ride home"), Category::Transportation);
        assert_eq!(categorize("Netflix monthly"), Category::Entertainment);
        assert_eq!(categorize("HDFC EMI payment"), Category::Banking);
        assert_eq!(categorize("Big Bazaar weekly run"), Category::Groceries);
        assert_eq!(categorize("Electricity recharge"), Category::Utilities);
        assert_eq!(categorize("Apollo pharmacy"), Category::Healthcare);
        assert_eq!(categorize("College tuition fee"), Category::Education);
    }

    #[test]
    fn test_first_match_wins() {
        // "food" (Dining) appears before "mart" (Groceries) in the table
        assert_eq!(categorize("food mart"), Category::Dining);
        // "uber" (Transportation) shadows "subscription" (Entertainment)
        assert_eq!(categorize("uber subscription"), Category::Transportation);
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("   "), Category::Other);
        assert_eq!(categorize("Suspicious unknown UPI payment"), Category::Other);
    }

    #[test]
    fn test_case_and_punctuation() {
        assert_eq!(categorize("NETFLIX.COM *subscription"), Category::Entertainment);
        assert_eq!(categorize("UBER *TRIP 4421"), Category::Transportation);
    }
}
