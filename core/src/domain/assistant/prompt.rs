use crate::domain::assistant::{entities::ChatTurn, value_objects::ChatInput};

/// Opening tag of the machine-readable nutrition block appended to replies.
pub const NUTRITION_DATA_TAG: &str = "<!--NUTRITION_DATA:";

pub const SYSTEM_PROMPT: &str = r#"You are a friendly nutrition assistant who helps people keep a food log.

When someone describes what they are eating:
1. Estimate calories (kcal), protein (g), carbohydrates (g) and fat (g) for a typical serving.
2. Ask about portion size, preparation or ingredients when the answer depends on them.
3. Give your best estimate when exact figures are not available.
4. Stay encouraging about healthy habits.

Whenever your answer contains specific nutrition figures for a food, finish it with a data tag in exactly this format so the figures can be added to the log:

<!--NUTRITION_DATA:{"name":"food name","calories":123,"protein":5.0,"carbs":20.0,"fat":8.0}-->

All values must be JSON numbers. Leave the tag out when you are only asking a clarifying question.

For example:
"A medium banana (about 118 g) has roughly 105 kcal, 1.3 g protein, 27 g carbs and 0.4 g fat. A good pick before a workout!

<!--NUTRITION_DATA:{"name":"Medium Banana","calories":105,"protein":1.3,"carbs":27,"fat":0.4}-->"

Keep answers short and conversational."#;

pub const PRIMER_ACKNOWLEDGEMENT: &str =
    "Understood! I'm ready to help you track your nutrition. What are you eating?";

/// Full conversation sent upstream: the instructions primed as a first exchange, the
/// prior history, then the new message.
pub fn build_conversation(input: &ChatInput) -> Vec<ChatTurn> {
    let mut turns = Vec::with_capacity(input.history.len() + 3);
    turns.push(ChatTurn::user(format!(
        "[System Instructions]: {SYSTEM_PROMPT}"
    )));
    turns.push(ChatTurn::assistant(PRIMER_ACKNOWLEDGEMENT));
    turns.extend(input.history.iter().cloned());
    turns.push(ChatTurn::user(input.message.clone()));
    turns
}
