//! Evaluation instruction builders.
//!
//! Two variants, selected by configuration: the built-in coherence rubric,
//! or a minimal instruction wrapping a caller-supplied context. The rubric
//! wording is part of the judged behavior; change it deliberately and update
//! the marker tests below.

/// Default coherence rubric sent when no custom context is configured.
pub(crate) const COHERENCE_RUBRIC: &str = r#"Analyze the conversation and determine if the latest assistant response makes sense.

CRITICAL: DO NOT judge whether the scenario is real or fictional. DO NOT require "objective" or "factual" answers. Fiction, roleplay, and fantasy scenarios are VALID contexts.

Evaluate ONLY whether the response is internally coherent and communicates effectively within whatever context is established.

"Making sense" means the response demonstrates coherent thinking and genuine communication, regardless of whether it's about real or fictional topics.

A response MAKES SENSE when ALL of these are true:
1. It directly addresses what was asked (not just mentions related words)
2. It follows a logical thought progression
3. It communicates actual information or ideas
4. It maintains coherent sentence structure
5. It's internally consistent within its established context (whether real or fictional)
6. It has a stable and consistent set of rules and logic that are followed throughout the conversation

A response DOES NOT make sense when ANY of these occur:
1. Ignores the question entirely (even if the response contains words)
2. Responds with unrelated information
3. Uses incoherent word combinations or "word salad"
4. Contains shouting, random capitalization, or stream-of-consciousness rambling
5. Treats obviously impossible physics as mundane (swimming through walls, cheese libraries)
6. Strings together topic keywords without forming coherent thoughts
7. Sounds like a 'I'm so random' middle schooler.
KEY INSIGHT: Just mentioning words related to the topic is NOT enough. The response must form coherent thoughts that actually engage with what was asked.

CRITICAL: If a response is just screaming keywords ("WARDS! BUTTERFLIES! PURPLE!") or describing impossible events as fact ("You swim through granite"), it does NOT make sense, even if those keywords relate to the original topic.

IMPORTANT DISTINCTION: There's a difference between:
- Coherent fiction with consistent rules (e.g., "The ancient keeper can sense but not touch artifacts")
- Random nonsense without internal logic (e.g., "You backstroke through granite into a cheese library")

The first establishes and follows its own rules. The second is just random impossibilities.

Ask yourself: "Does this response follow ANY consistent internal logic, or is it just random nonsense?"

Provide your analysis in two parts:
- "makesSense": true if this is coherent communication, false if it's nonsense
- "reasoning": Explain your decision"#;

/// Build the trailing instruction message content.
pub(crate) fn build_instruction(system_prompt: Option<&str>) -> String {
    match system_prompt {
        Some(context) => contextual_instruction(context),
        None => COHERENCE_RUBRIC.to_string(),
    }
}

/// Minimal instruction used when the caller supplies its own context.
fn contextual_instruction(context: &str) -> String {
    format!(
        "Analyze the conversation history and determine if the latest assistant response makes sense.\n\n\
         CONTEXT: {}\n\n\
         Based on the context above, evaluate the response and provide your analysis in two parts:\n\
         - \"makesSense\": Set to true if the response is appropriate given the context\n\
         - \"reasoning\": Explain WHY the response does or doesn't make sense given the context",
        context
    )
}
