// API Constants
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant for skincare advice. You only respond with products by L'Oreal.";

// Catalog Constants
pub const DEFAULT_CATALOG: &str = "products.json";
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "cleanser",
    "moisturizer",
    "haircare",
    "makeup",
    "hair color",
    "hair styling",
    "men's grooming",
    "suncare",
    "fragrance",
];

// UI Text
pub const PRODUCTS_PLACEHOLDER: &str = "Select a category to view products";
pub const PRODUCTS_EMPTY: &str = "No products found in this category.";
pub const PRODUCTS_LOADING: &str = "Loading products...";
pub const PRODUCTS_LOAD_FAILED: &str = "Unable to load products. Please try again.";
pub const SELECTION_PLACEHOLDER: &str = "No products selected.";

pub const NO_SELECTION_WARNING: &str =
    "No products selected. Please select products to generate a routine.";
pub const ROUTINE_PENDING: &str = "Generating your routine...";
pub const ROUTINE_HEADING: &str = "Your Routine:";
pub const ROUTINE_FOLLOW_UP_HINT: &str = "You can ask follow-up questions below.";
pub const ROUTINE_MISSING_CONTENT: &str = "Sorry, I couldn't generate a routine.";
pub const ROUTINE_FAILED: &str =
    "An error occurred while generating the routine. Please try again.";

pub const CHAT_PENDING: &str = "Thinking...";
pub const CHAT_MISSING_CONTENT: &str = "Sorry, I couldn't understand that.";
pub const CHAT_FAILED: &str = "An error occurred. Please try again.";
pub const CHAT_GREETING: &str = "Pick a few products and press 'g' to build your routine.";

pub const REQUEST_IN_FLIGHT: &str = "Please wait for the current reply to finish.";
