use crate::web::models::{ResponseOption, Tone};

// Offline reply selector used whenever the Claude call is not possible or
// fails. Keyword checks run in priority order over the lowercased input;
// every branch returns the same four tones in the same order.
pub fn fallback_options(patron_text: &str) -> Vec<ResponseOption> {
    let text = patron_text.to_lowercase();

    if text.contains("type") || text.contains("kind") || (text.contains("what") && text.contains("tea")) {
        return reply_set([
            "We have masala chai, ginger tea, cardamom tea, and regular black tea.",
            "We've got some delicious masala chai today, or would you prefer ginger tea?",
            "Our specialty is masala chai, but we also have ginger, cardamom, and plain black tea!",
            "Oh, you must try our masala chai - it's amazing! We also have ginger and cardamom varieties.",
        ]);
    }

    if text.contains("hello") || text.contains("hi") || text.contains("hey") || text.contains("morning") {
        return reply_set([
            "Good morning! Welcome to our tea station. How may I assist you?",
            "Good morning! So nice to see you. Would you like some chai?",
            "Hey there! Good morning! Ready for some delicious tea?",
            "Good morning! What a beautiful day! Let me get you some amazing chai!",
        ]);
    }

    if text.contains("thank") {
        return reply_set([
            "You're most welcome. Please enjoy your tea.",
            "You're very welcome! Enjoy, and let me know if you need anything else.",
            "My pleasure! Hope you love it!",
            "Absolutely! So happy I could help! Enjoy every sip!",
        ]);
    }

    reply_set([
        "I'd be happy to help you. What would you like to know about our tea?",
        "Sure! What can I tell you about our tea selection?",
        "Of course! What would you like to know?",
        "Absolutely! I'm here to help - what do you need?",
    ])
}

fn reply_set(responses: [&str; 4]) -> Vec<ResponseOption> {
    let tones = [Tone::Formal, Tone::Warm, Tone::Friendly, Tone::Enthusiastic];
    responses
        .iter()
        .zip(tones)
        .map(|(response, tone)| ResponseOption {
            response: response.to_string(),
            tone,
        })
        .collect()
}
