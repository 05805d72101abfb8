// LLM prompt constants for the Event Invitation module.

pub const INVITATION_PERSONA: &str =
    "You are a warm, professional events coordinator for a university alumni network.";

/// Invitation prompt template. Replace `{event_details}` before sending.
pub const INVITATION_PROMPT_TEMPLATE: &str = r#"Write an invitation for alumni to the event described below.

Return a JSON object with this EXACT schema:
{
  "subject": "A short, inviting email subject line",
  "invitation": "The full invitation text, addressed to alumni, 2-4 short paragraphs"
}

RULES:
1. Use ONLY the facts given in the event details. Do NOT invent dates, times, venues, speakers, or prices.
2. If a detail such as the date or location is missing, leave it out rather than guessing.
3. End the invitation with a clear call to RSVP.

EVENT DETAILS:
{event_details}"#;
