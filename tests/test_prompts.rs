//! Tests for the persona prompt shipped in config/prompts

use std::fs;

#[test]
fn test_persona_prompt_file_exists() {
    let path = "config/prompts/persona.md";
    assert!(fs::metadata(path).is_ok(), "persona.md prompt file missing");
}

#[test]
fn test_persona_prompt_template_vars() {
    let text = fs::read_to_string("config/prompts/persona.md").unwrap();
    for var in ["{{name}}", "{{headline}}", "{{location}}", "{{contacts}}", "{{projects}}"] {
        assert!(text.contains(var), "persona.md should contain {var} variable");
    }
}

#[test]
fn test_persona_prompt_guidelines() {
    let text = fs::read_to_string("config/prompts/persona.md").unwrap();
    assert!(text.contains("STRICT COMMUNICATION GUIDELINES"));
    assert!(text.to_lowercase().contains("both"), "persona should ask for both emails");
}

#[test]
fn test_default_config_points_at_persona() {
    let text = fs::read_to_string("config/default.toml").unwrap();
    assert!(text.contains("config/prompts/persona.md"));
}
