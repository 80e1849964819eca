//! Built-in task profiles.
//!
//! Templates use `{{name}}` placeholders. Always available: `primaryInput`,
//! `conversationContext`, `knowledgeBase`, `schema`; plus every declared parameter.

use super::params::{ParamKind, ParamSpec};
use super::schema::{FallbackPlan, FieldSpec, OutputSchema, RecordSchema};

pub const CONTENT_GENERATOR: &str = "content-generator";
pub const QA_CHATBOT: &str = "qa-chatbot";
pub const PROBLEM_SOLVER: &str = "problem-solver";
pub const DEEPTHINK_ASSISTANT: &str = "deepthink-assistant";
pub const RECIPE_GENERATOR: &str = "recipe-generator";

pub const MODEL_GPT_4O_MINI: &str = "openai/gpt-4o-mini";
pub const MODEL_GEMINI_FLASH_THINKING: &str = "google/gemini-2.0-flash-thinking-exp:free";

pub(crate) struct ProfileDef {
    pub task_id: &'static str,
    pub title: &'static str,
    pub model: &'static str,
    pub system_template: &'static str,
    pub user_template: &'static str,
    pub schema: OutputSchema,
    pub params: &'static [ParamSpec],
}

// ============= content-generator =============

const CONTENT_SYSTEM: &str = r#"You are an AI content generator. Produce text with the specified tone, genre, audience and approximate word count.

Rules:
1) Match the requested tone and genre, and write for the stated target audience.
2) Aim for roughly {{contentLength}} words.
3) If "Include Keywords" is Yes, weave the listed keywords in naturally; otherwise ignore them.
4) Put the finished text in "output" and a short note on how you approached it in "reasoning".
5) Output only JSON, no triple backticks or extra text.

Return JSON in the format:
{{schema}}"#;

const CONTENT_USER: &str = r#"User's Content Request
----------------------
Brief: "{{primaryInput}}"

Tone: {{tone}}
Genre: {{genre}}
Target Audience: {{targetAudience}}
Desired Length: ~{{contentLength}} words

Include Keywords: {{includeKeywords}}
Keywords: {{keywords}}"#;

const CONTENT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("tone", ParamKind::Text, ""),
    ParamSpec::new("genre", ParamKind::Text, ""),
    ParamSpec::new("targetAudience", ParamKind::Text, ""),
    ParamSpec::new("contentLength", ParamKind::Number, "300"),
    ParamSpec::new("includeKeywords", ParamKind::Flag, "No"),
    ParamSpec::new("keywords", ParamKind::Text, ""),
];

// ============= qa-chatbot =============

const QA_SYSTEM: &str = r#"You are a helpful Q&A assistant. The user provides the conversation so far, a new question, and optional knowledge-base files.

Rules:
1) Use the conversation context and the knowledge base to answer as accurately as possible.
2) If the knowledge base does not cover the question, say so and answer from general knowledge.
3) Provide a short chain of thought in "reasoning".
4) Output only JSON, no triple backticks or extra text.

Return JSON in the format:
{{schema}}"#;

const QA_USER: &str = r#"Conversation so far:
{{conversationContext}}

New user question: "{{primaryInput}}"

Knowledge Base (if any):
{{knowledgeBase}}"#;

// ============= problem-solver =============

const SOLVER_SYSTEM: &str = r#"You are a problem solver that can handle both math and coding issues.

Rules:
1) If the problem type is math, show step-by-step logic and the final answer.
2) If the problem type is coding, provide debugging steps and a final solution.
3) Put the final answer in "solution" and your working in "reasoning".
4) Output only JSON, no triple backticks or extra text.

Return JSON in the format:
{{schema}}"#;

const SOLVER_USER: &str = r#"Conversation so far (last 5):
{{conversationContext}}

Problem type: {{problemType}}
New user question: "{{primaryInput}}"

Error or extra info (if coding): "{{errorInput}}""#;

const SOLVER_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("problemType", ParamKind::Text, "math"),
    ParamSpec::new("errorInput", ParamKind::Text, ""),
];

// ============= deepthink-assistant =============

const DEEPTHINK_SYSTEM: &str = r#"You are a multifaceted assistant providing in-depth thinking for tasks such as Summarize, Brainstorm, Outline, Analyze, or Research.

Rules:
1) Respond in {{language}}.
2) Detail level: {{detailLevel}}% (100% is exhaustive, 0% is a one-line answer).
3) Include examples only if "Include Examples" is Yes.
4) Use the knowledge base when it is relevant to the task.
5) Put the result in "output" and your thought process in "reasoning".
6) Output only JSON, no triple backticks or extra text.

Return JSON in the format:
{{schema}}"#;

const DEEPTHINK_USER: &str = r#"Task: {{task}}
---
Main Text:
{{primaryInput}}

Knowledge Base (if any):
{{knowledgeBase}}

Detail Level: {{detailLevel}}%
Include Examples: {{useExamples}}
Language: {{language}}"#;

const DEEPTHINK_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("task", ParamKind::Text, ""),
    ParamSpec::new("detailLevel", ParamKind::Number, "50"),
    ParamSpec::new("useExamples", ParamKind::Flag, "No"),
    ParamSpec::new("language", ParamKind::Text, "english"),
];

// ============= recipe-generator =============

const RECIPE_SYSTEM: &str = r#"You are an AI recipe assistant. Return valid JSON in the structure:
{{schema}}

Constraints:
1) The user can have a priority of "tasty", "calorie", or "dessert".
   - If "calorie", keep the dish under {{maxCalories}} calories total if possible.
2) User wants enough for {{numPeople}} people.
3) Meal type: {{mealType}}
4) Cooking time: ~{{cookingTime}} minutes.
5) Cuisine: {{cuisine}}
6) Ingredients: {{ingredients}}
7) User notes: {{primaryInput}}
8) Assume pantry staples, including masalas and other small spices, are already at home.
9) If the dish does not have a specific name, invent a fun and creative name.
10) Provide a shortDescription (3-4 sentences) in both English and Hindi.
11) Provide extremely detailed step-by-step instructions in both English and Hindi.
12) Provide at least 2-3 recipes in the "recipes" array (sometimes just 1 or 2).
13) Include 1-3 lines of thought process in both English and Hindi (reasoningEn and reasoningHi).
14) Output only JSON, no triple backticks or extra text.
15) If no ingredients are provided, generate random, fun recipes with creative names and unexpected twists.

Thought-process examples (English):
"Reviewed the ingredients and kept the recipe low-calorie while maximizing flavor. Detailed steps ensure ease of preparation."
"Balanced taste and health by reimagining a classic dish with a creative twist. Each step is clear and concise."
"Analyzed user inputs and designed a fun, efficient recipe with simple, step-by-step instructions."

Now provide the same style in both English and Hindi."#;

const RECIPE_USER: &str = r#"User priority: {{priority}}
Max calories (only if calorie): {{maxCalories}}
Number of people: {{numPeople}}
Meal type: {{mealType}}
Cooking time: {{cookingTime}} minutes
Cuisine: {{cuisine}}
Additional notes: {{primaryInput}}

Ingredients: {{ingredients}}

Return JSON with both English and Hindi fields:
- "titleEn", "titleHi"
- "shortDescriptionEn", "shortDescriptionHi"
- "ingredientsEn", "ingredientsHi"
- "instructionsEn", "instructionsHi"
- "reasoningEn", "reasoningHi"
And follow the constraints above."#;

const RECIPE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("ingredients", ParamKind::List, ""),
    ParamSpec::new("priority", ParamKind::Text, "tasty"),
    ParamSpec::new("maxCalories", ParamKind::Number, "500"),
    ParamSpec::new("numPeople", ParamKind::Text, "2"),
    ParamSpec::new("mealType", ParamKind::Text, ""),
    ParamSpec::new("cookingTime", ParamKind::Text, "30"),
    ParamSpec::new("cuisine", ParamKind::Text, ""),
];

pub static RECIPE_ITEM: RecordSchema = RecordSchema {
    fields: &[
        FieldSpec::text("titleEn"),
        FieldSpec::text("titleHi"),
        FieldSpec::text("shortDescriptionEn"),
        FieldSpec::text("shortDescriptionHi"),
        FieldSpec::text("caloriesEstimate"),
        FieldSpec::text("healthTasteRatio"),
        FieldSpec::text_list("ingredientsEn"),
        FieldSpec::text_list("ingredientsHi"),
        FieldSpec::text_list("instructionsEn"),
        FieldSpec::text_list("instructionsHi"),
    ],
};

const RECIPE_PLACEHOLDER: &[(&str, &str)] = &[
    ("titleEn", "Fallback Recipe"),
    ("titleHi", "फ़ॉलबैक रेसिपी"),
    ("shortDescriptionEn", "Could not parse short description."),
    ("shortDescriptionHi", "शॉर्ट विवरण पार्स नहीं हो पाया।"),
    ("caloriesEstimate", "Unknown"),
    ("healthTasteRatio", "Unknown"),
];

const RECIPE_NOTICES: &[(&str, &str)] = &[("reasoningHi", "Could not parse Hindi reasoning.")];

// ============= table =============

const ANSWER_FIELDS: &[FieldSpec] = &[FieldSpec::text("answer"), FieldSpec::text("reasoning")];
const OUTPUT_FIELDS: &[FieldSpec] = &[FieldSpec::text("output"), FieldSpec::text("reasoning")];
const SOLUTION_FIELDS: &[FieldSpec] =
    &[FieldSpec::text("solution"), FieldSpec::text("reasoning")];

pub(crate) static BUILTIN: &[ProfileDef] = &[
    ProfileDef {
        task_id: CONTENT_GENERATOR,
        title: "Content generation",
        model: MODEL_GPT_4O_MINI,
        system_template: CONTENT_SYSTEM,
        user_template: CONTENT_USER,
        schema: OutputSchema {
            fields: OUTPUT_FIELDS,
            primary: "output",
            fallback: FallbackPlan::RawIntoPrimary,
        },
        params: CONTENT_PARAMS,
    },
    ProfileDef {
        task_id: QA_CHATBOT,
        title: "Open-domain Q&A",
        model: MODEL_GPT_4O_MINI,
        system_template: QA_SYSTEM,
        user_template: QA_USER,
        schema: OutputSchema {
            fields: ANSWER_FIELDS,
            primary: "answer",
            fallback: FallbackPlan::RawIntoPrimary,
        },
        params: &[],
    },
    ProfileDef {
        task_id: PROBLEM_SOLVER,
        title: "Step-by-step problem solving",
        model: MODEL_GEMINI_FLASH_THINKING,
        system_template: SOLVER_SYSTEM,
        user_template: SOLVER_USER,
        schema: OutputSchema {
            fields: SOLUTION_FIELDS,
            primary: "solution",
            fallback: FallbackPlan::RawIntoPrimary,
        },
        params: SOLVER_PARAMS,
    },
    ProfileDef {
        task_id: DEEPTHINK_ASSISTANT,
        title: "Deep analysis",
        model: MODEL_GEMINI_FLASH_THINKING,
        system_template: DEEPTHINK_SYSTEM,
        user_template: DEEPTHINK_USER,
        schema: OutputSchema {
            fields: OUTPUT_FIELDS,
            primary: "output",
            fallback: FallbackPlan::RawIntoPrimary,
        },
        params: DEEPTHINK_PARAMS,
    },
    ProfileDef {
        task_id: RECIPE_GENERATOR,
        title: "Recipe synthesis",
        model: MODEL_GEMINI_FLASH_THINKING,
        system_template: RECIPE_SYSTEM,
        user_template: RECIPE_USER,
        schema: OutputSchema {
            fields: &[
                FieldSpec::records("recipes", &RECIPE_ITEM),
                FieldSpec::text("reasoningEn"),
                FieldSpec::text("reasoningHi"),
            ],
            primary: "recipes",
            fallback: FallbackPlan::PlaceholderRecord {
                record: RECIPE_PLACEHOLDER,
                raw_field: "reasoningEn",
                notices: RECIPE_NOTICES,
            },
        },
        params: RECIPE_PARAMS,
    },
];
