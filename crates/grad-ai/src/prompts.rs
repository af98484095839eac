//! Prompt templates. Each asks for a single JSON object of a fixed shape.

use crate::types::UserProfile;

#[must_use]
pub fn search_prompt(query: &str) -> String {
    format!(
        r#"Search for universities based on this query: "{query}"

Please provide detailed information about relevant universities in the following JSON format:
{{
  "universities": [
    {{
      "name": "University Name",
      "location": "City, State/Province",
      "country": "Country",
      "ranking": 15,
      "acceptanceRate": 12.5,
      "tuition": 45000,
      "programs": ["Computer Science", "Engineering"],
      "deadline": "2024-12-01",
      "website": "https://university.edu",
      "requirements": {{ "gpa": 3.8, "gre": 320, "toefl": 100 }},
      "description": "Brief description of the university and why it matches the query"
    }}
  ]
}}

Please include:
- Top 5-8 most relevant universities
- Current and accurate information
- Specific program information if mentioned in the query
- Realistic acceptance rates and requirements
- Application deadlines for graduate programs
- Annual tuition in USD"#
    )
}

#[must_use]
pub fn details_prompt(university_name: &str) -> String {
    format!(
        r#"Get detailed information about "{university_name}" university.

Please provide comprehensive information in the following JSON format:
{{
  "name": "Full University Name",
  "location": "City, State/Province",
  "country": "Country",
  "ranking": 25,
  "acceptanceRate": 18.5,
  "tuition": 52000,
  "programs": ["Computer Science", "Data Science", "Engineering"],
  "deadline": "2024-12-15",
  "website": "https://university.edu",
  "requirements": {{ "gpa": 3.7, "gre": 315, "toefl": 95 }},
  "description": "Strengths, notable programs, research opportunities and campus life"
}}

Please provide:
- Graduate program admission requirements
- Popular graduate programs offered
- Application deadlines for the next fall intake
- Annual tuition for graduate programs in USD
- University ranking (global or national)"#
    )
}

#[must_use]
pub fn recommendations_prompt(profile: &UserProfile) -> String {
    format!(
        r#"Based on this user profile, recommend suitable universities:
- Interests: {interests}
- Preferred Locations: {locations}
- Budget Range: {budget}
- Academic Background: {background}

Please provide 6-8 university recommendations in the following JSON format:
{{
  "recommendations": [
    {{
      "name": "University Name",
      "location": "City, State/Province",
      "country": "Country",
      "ranking": 20,
      "acceptanceRate": 15.0,
      "tuition": 48000,
      "programs": ["Relevant Program 1", "Relevant Program 2"],
      "deadline": "2024-12-01",
      "website": "https://university.edu",
      "requirements": {{ "gpa": 3.6, "gre": 310, "toefl": 90 }},
      "description": "Why this university is recommended for this user",
      "matchReason": "Specific reasons why this matches the user's profile",
      "category": "reach|target|safety"
    }}
  ]
}}

Please ensure:
- Mix of reach, target, and safety schools
- Programs align with user interests
- Locations match preferences when possible
- Tuition fits within budget range"#,
        interests = profile.interests.join(", "),
        locations = profile.preferred_locations.join(", "),
        budget = profile.budget_range,
        background = profile.academic_background,
    )
}
