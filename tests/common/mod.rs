#![allow(dead_code)]

use recipe_api_cli::{RecipeApiClient, Terminal};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "rapi_test_0123456789";

/// Terminal writing into memory, without colors.
pub type CapturedTerminal = Terminal<Vec<u8>, Vec<u8>>;

pub struct TestEnvironment {
    pub server: MockServer,
    pub client: RecipeApiClient,
}

impl TestEnvironment {
    /// Mock API plus a client holding a well-formed key.
    pub async fn new() -> Self {
        Self::with_key(Some(TEST_API_KEY)).await
    }

    pub async fn with_key(api_key: Option<&str>) -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        let client = RecipeApiClient::new(server.uri(), api_key.map(str::to_string));
        Self { server, client }
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn terminal() -> CapturedTerminal {
    Terminal::new(Vec::new(), Vec::new(), false)
}

/// Returns (stdout, stderr) written so far.
pub fn output(term: CapturedTerminal) -> (String, String) {
    let (out, err) = term.into_parts();
    (
        String::from_utf8(out).expect("stdout is UTF-8"),
        String::from_utf8(err).expect("stderr is UTF-8"),
    )
}

pub fn recipe_summary_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "A weeknight classic with a crisp crust and a rich, slow-cooked tomato sauce topped with basil",
        "category": "Main",
        "cuisine": "Italian",
        "difficulty": "Beginner",
        "tags": ["quick", "family"],
        "meta": {
            "active_time": "PT20M",
            "passive_time": "PT25M",
            "total_time": "PT45M",
            "overnight_required": false,
            "yields": "4 servings",
            "yield_count": 4,
            "serving_size_g": 320
        },
        "dietary": {
            "flags": ["Vegetarian", "Nut-Free", "Egg-Free", "Soy-Free", "Halal"],
            "not_suitable_for": ["Vegan"]
        },
        "nutrition_summary": {
            "calories": 512.6,
            "protein_g": 21.2,
            "carbohydrates_g": 64.0,
            "fat_g": 18.4
        }
    })
}

pub fn recipe_list_json(recipes: Vec<Value>, total: u64, page: u64, per_page: u64) -> Value {
    json!({
        "data": recipes,
        "meta": { "total": total, "page": page, "per_page": per_page }
    })
}

pub fn full_recipe_json(id: &str) -> Value {
    json!({
        "data": {
            "id": id,
            "name": "Overnight Focaccia",
            "description": "Airy olive oil bread with a crackling crust.",
            "category": "Bread",
            "cuisine": "Italian",
            "difficulty": "Intermediate",
            "tags": ["bread"],
            "meta": {
                "active_time": "PT30M",
                "passive_time": "PT12H",
                "total_time": "PT12H30M",
                "overnight_required": true,
                "yields": "1 tray",
                "yield_count": 1,
                "serving_size_g": 110
            },
            "dietary": { "flags": ["Vegan", "Dairy-Free"], "not_suitable_for": [] },
            "nutrition": {
                "per_serving": {
                    "calories": 245.4,
                    "protein_g": 6.6,
                    "carbohydrates_g": 38.2,
                    "fat_g": 7.5,
                    "fiber_g": 1.6
                },
                "sources": ["USDA"]
            },
            "storage": {
                "refrigerator": { "notes": "", "duration": "2 days" },
                "freezer": { "duration": "1 month" },
                "reheating": "Warm in a hot oven for 5 minutes",
                "does_not_keep": false
            },
            "equipment": [
                { "name": "Sheet pan", "required": true, "alternative": "Cast iron skillet" },
                { "name": "Stand mixer", "required": false, "alternative": null }
            ],
            "ingredients": [
                {
                    "group_name": "Dough",
                    "items": [
                        {
                            "name": "bread flour",
                            "quantity": 500,
                            "unit": "g",
                            "preparation": null,
                            "notes": null,
                            "substitutions": [],
                            "ingredient_id": "ing_flour",
                            "nutrition_source": "USDA"
                        },
                        {
                            "name": "water",
                            "quantity": 1.5,
                            "unit": "cups",
                            "preparation": "lukewarm",
                            "notes": "about 40C",
                            "substitutions": [],
                            "ingredient_id": "ing_water",
                            "nutrition_source": "USDA"
                        }
                    ]
                },
                {
                    "group_name": "",
                    "items": [
                        {
                            "name": "flaky salt",
                            "quantity": "to taste",
                            "unit": null,
                            "preparation": null,
                            "notes": null,
                            "substitutions": [],
                            "ingredient_id": "ing_salt",
                            "nutrition_source": "USDA"
                        }
                    ]
                }
            ],
            "instructions": [
                {
                    "step_number": 1,
                    "phase": "prep",
                    "text": "Mix flour and water until no dry spots remain.",
                    "structured": { "action": "mix", "temperature": null, "duration": "PT5M", "doneness_cues": null },
                    "tips": ["Use a wet hand to avoid sticking."]
                },
                {
                    "step_number": 2,
                    "phase": "rest",
                    "text": "Cover and refrigerate overnight.",
                    "structured": { "action": "rest", "temperature": null, "duration": "PT12H", "doneness_cues": null },
                    "tips": []
                }
            ],
            "troubleshooting": { "Dense crumb": "Let the dough proof longer." },
            "chef_notes": ["Good olive oil makes all the difference."],
            "cultural_context": "A Ligurian staple."
        },
        "usage": {
            "monthly_remaining": 12500,
            "monthly_limit": 15000,
            "daily_remaining": 480,
            "daily_limit": 500
        }
    })
}

/// Routes the crate's tracing output through the test harness, so it shows
/// up for failing tests (or all of them with `--nocapture`).
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::new("recipe_api_cli=debug"))
        .try_init();
}
