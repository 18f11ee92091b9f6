/// Builds the structured itinerary instruction sent to the language model.
///
/// Pure and deterministic: equal input yields byte-identical output. The user
/// text is embedded verbatim inside a quote fence that is widened until it no
/// longer occurs in the text, so no input can close the block early.
pub fn synthesize(user_text: &str) -> String {
    let fence = fence_for(user_text);
    format!(
        "You are a professional travel planner. Create a clear, day-by-day itinerary, \
packing list, budget estimate, local tips, transit notes, and one \"must-try\" \
restaurant suggestion.\n\
User request: {fence}{user_text}{fence}\n\n\
Format the output as JSON with keys: title, days (array of {{day, date (if given), \
morning, afternoon, evening, activities}}), packing_list (array), budget_estimate \
(currency & number), transport_tips, emergency_contacts (generic), short_summary\n\
Be concise but useful. If dates are missing, assume flexible dates and suggest an \
example date range. If budget is given, respect it. Keep total token usage reasonable.\n"
    )
}

// Smallest run of '"' of length >= 3 that does not occur in the text.
fn fence_for(text: &str) -> String {
    let mut fence = String::from("\"\"\"");
    while text.contains(&fence) {
        fence.push('"');
    }
    fence
}
