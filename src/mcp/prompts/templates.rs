//! Prompt template definitions for the deskimg MCP server.
//!
//! The compress-image prompt renders a natural-language compression request
//! for a desktop image. It resolves the output name exactly like the
//! compress tool but performs no file I/O itself.

use rmcp::model::*;

use crate::compress::resolve_output_name;

/// Quality used when the prompt's string-typed quality argument is absent
/// or unparsable.
const PROMPT_DEFAULT_QUALITY: i64 = 85;

/// Returns the list of all available MCP prompts.
pub fn list_prompts() -> Vec<Prompt> {
    vec![Prompt {
        name: "compress-image".into(),
        title: Some("Compress Desktop Image".into()),
        description: Some(
            "Generate a request message asking for a desktop image to be compressed.".into(),
        ),
        arguments: Some(vec![
            PromptArgument {
                name: "fileName".into(),
                title: Some("File name".into()),
                description: Some("Name of the image file to compress".into()),
                required: Some(true),
            },
            PromptArgument {
                name: "quality".into(),
                title: Some("Quality".into()),
                description: Some("Compression quality (1-100)".into()),
                required: Some(false),
            },
            PromptArgument {
                name: "outputName".into(),
                title: Some("Output name".into()),
                description: Some("Output file name (optional)".into()),
                required: Some(false),
            },
        ]),
        icons: None,
        meta: None,
    }]
}

/// Retrieves a prompt by name, substituting the provided arguments.
///
/// Returns `None` if the prompt name is unknown.
pub fn get_prompt(
    name: &str,
    arguments: &serde_json::Map<String, serde_json::Value>,
) -> Option<GetPromptResult> {
    match name {
        "compress-image" => Some(build_compress_image(arguments)),
        _ => None,
    }
}

/// Helper: extract a string argument with an optional default.
fn arg_str<'a>(
    args: &'a serde_json::Map<String, serde_json::Value>,
    key: &str,
    default: &'a str,
) -> &'a str {
    args.get(key).and_then(|v| v.as_str()).unwrap_or(default)
}

fn build_compress_image(
    args: &serde_json::Map<String, serde_json::Value>,
) -> GetPromptResult {
    let file_name = arg_str(args, "fileName", "");

    // quality arrives as a string; unparsable or zero falls back to the
    // default, out-of-range values clamp into 1-100.
    let quality = arg_str(args, "quality", "")
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|&q| q != 0)
        .unwrap_or(PROMPT_DEFAULT_QUALITY)
        .clamp(1, 100);

    let output_name = args.get("outputName").and_then(|v| v.as_str());
    let resolved_output = resolve_output_name(file_name, output_name);

    let text = format!(
        "Please compress the image \"{file_name}\" at quality {quality}%, \
         writing the result to \"{resolved_output}\"."
    );

    GetPromptResult {
        description: Some("Compression request message".into()),
        messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
    }
}
