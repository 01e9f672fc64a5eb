//! Prompt assembly for the extraction call.
//!
//! The instruction text is static; the schema-derived format
//! instructions are rendered from the catalog, so the prompt always
//! matches whatever the taxonomy currently declares.

use scenelens_core::{catalog, schema::render_format_instructions};

const PROMPT_TEMPLATE: &str = "\
You are an expert analyst of social interaction.
You are given an unstructured narrative description of a scene.

Your task is to convert this text into a structured social analysis of
the focal agent: the normative context of the setting, the relationship
and power dynamics between the agents, the focal agent's emotional
state, and the communicative intent of their focal utterance or action.
Ground every judgment in cues present in the text; do not invent events
that the text does not support.

You are to respond in the JSON format defined below.

Format Instructions:
--------------
{format_instructions}
--------------

Scene Text:
--------------
{input}
--------------
";

/// Render the full prompt for one scene: template + catalog-derived
/// format instructions + the caller's narrative text.
pub fn render(input: &str) -> String {
  let instructions =
    render_format_instructions(&catalog::social_event_analysis());
  PROMPT_TEMPLATE
    .replace("{format_instructions}", &instructions)
    .replace("{input}", input)
}
