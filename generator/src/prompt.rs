//! Prompt template for content generation
//!
//! The model is asked for exactly one JSON object with four fields. The
//! cardinalities in the wording are guidance for the model only.

use serde_json::json;

/// Example object shown to the model as the required output shape
pub fn example_response(topic: &str) -> String {
    let example = json!({
        "titles": ["Amazing Title 1", "Incredible Title 2"],
        "scriptOutline": "Intro:\n- Hook viewer\nMain Content:\n- Point 1\n- Point 2\nCall to Action:\n- Subscribe!\nOutro:\n- Thanks for watching!",
        "description": format!(
            "In this video, we discuss {}.\n\nDon't forget to subscribe: [Your Channel Link]\n\nCheck out this related video: [Link to Related Video/Resource]\n\n#keyword1 #keyword2",
            topic
        ),
        "tags": ["tag1", "tag2", "common phrase tag"]
    });
    // Serializing a json! literal cannot fail
    serde_json::to_string_pretty(&example).unwrap_or_else(|_| example.to_string())
}

/// Build the instruction sent to the model for a topic
pub fn build_prompt(topic: &str) -> String {
    let topic = topic.trim();
    format!(
        r#"You are an expert YouTube content strategist.
For the given topic: "{topic}", generate the following content for a YouTube video, formatted strictly as a single JSON object:
1.  "titles": An array of 3-5 catchy and SEO-friendly video title suggestions. Each title must be a string.
2.  "scriptOutline": A single string holding a structured script outline with the sections "Intro" (hooking the viewer), "Main Content" (2-3 key points or steps), "Call to Action" (subscribe, like, comment) and "Outro". Separate lines and sections with newline characters (\n).
3.  "description": A single string holding a compelling video description: a short summary, a call to action, relevant keywords, and the placeholders "[Your Channel Link]" and "[Link to Related Video/Resource]". Separate paragraphs with newline characters (\n).
4.  "tags": An array of 10-15 relevant YouTube tags. Each tag must be a string.

The output MUST be one valid JSON object. Do not include any text, markdown formatting, code fences, or explanations outside of the JSON object itself.
Example JSON structure:
{example}"#,
        topic = topic,
        example = example_response(topic),
    )
}
