// LLM prompt constants for the Mentor Matching module.

/// Persona line for the ranking system prompt. Combined with the JSON-only
/// rules via `llm_client::prompts::json_system`.
pub const MENTOR_MATCH_PERSONA: &str = "You are an expert at finding mentors for students.";

/// Ranking prompt template.
/// Replace: {max_matches}, {skills_and_interests}, {alumni_json}
pub const MENTOR_MATCH_PROMPT_TEMPLATE: &str = r#"You will be given a list of all available alumni and a student's skills and interests.
Analyze the list and return the top {max_matches} alumni who are the most suitable mentors for this student.

RANKING RULES:
1. Heavily prioritize direct matches between the student's interests and the mentor's `skills`.
   `currentRole` and `shortBio` are useful context, but `skills` is the most important factor.
2. For each selected mentor, attach an integer `matchScore` from 0 to 100 describing how well the
   mentor's profile (especially their skills) fits the student. A direct skill match must score
   significantly higher than a role or bio match.
3. Order the selections from best to worst fit.

HARD RULES:
1. Select ONLY from the alumni listed below. Do NOT invent or create new alumni.
2. Copy `name` and `email` EXACTLY as they appear in the list.
3. Return at most {max_matches} selections.

Return a JSON object with this EXACT schema:
{
  "mentorMatches": [
    {
      "name": "string",
      "email": "string",
      "graduationYear": 2015,
      "currentRole": "string",
      "skills": ["string"],
      "linkedinURL": "string",
      "shortBio": "string",
      "matchScore": 87
    }
  ]
}

THE STUDENT'S SKILLS AND INTERESTS:
"{skills_and_interests}"

AVAILABLE ALUMNI:
{alumni_json}"#;
