/// Prompt for a single user-selected region.
pub fn single_region_prompt(target_language: &str) -> String {
    format!(
        "Transcribe text in image and translate to {target_language}.\n\
         Output strictly valid JSON:\n\
         {{ \"originalText\": \"...\", \"translation\": \"...\" }}"
    )
}

/// Prompt for a whole frame, asking for blocks in reading order.
pub fn full_frame_prompt(target_language: &str) -> String {
    format!(
        "Find all text blocks. Transcribe and translate to {target_language}.\n\
         Order top-to-bottom.\n\
         Output strictly valid JSON Array:\n\
         [ {{ \"originalText\": \"...\", \"translation\": \"...\" }} ]"
    )
}
