pub mod form;
pub mod prompts;
pub mod render;

pub use form::{parse_consumed_entries, parse_consumed_entry, parse_form, PlanRequest};
pub use prompts::{prompt_bounds, prompt_consumed, prompt_number, prompt_yes_no};
pub use render::{catalog_json, display_catalog, display_plan, plan_json, plan_lines};
