//! Prompt construction for correction, detection, and summarization
//!
//! The instructions are opaque configuration for the completion service;
//! nothing in the engine branches on their contents.

use bhasha_domain::LanguageCode;

/// Build the full-correction prompt for a language-specific check
pub(crate) fn correction_prompt(language: LanguageCode, text: &str) -> String {
    format!(
        r#"You are a language expert for {language}. Your task is to correct spelling and grammar errors in the provided text.

- Only correct clear, undeniable errors.
- Do not change correctly spelled words. Your "corrected" and "original" fields must not be identical.
- Do not change proper nouns, brand names, or transliterated words (e.g., Google).
- Provide the fully corrected text in 'correctedText'.
- List every change you made in the 'corrections' array, each with 'original', 'corrected', 'description', and 'type' ('spelling' or 'grammar'). If you made no changes, this array must be empty.

Input Text:
"{text}""#,
        language = language.display_name(),
        text = text,
    )
}

/// Build the English spelling-check prompt
pub(crate) fn spelling_prompt(text: &str) -> String {
    format!(
        r#"You are an expert English proofreader. Your task is to identify spelling errors in the provided text.
- Only flag clear spelling mistakes.
- Do not flag proper nouns, brand names, or technical terms.
- Do not change correctly spelled words. The 'word' and 'suggestion' fields must not be identical.
- If no errors are found, return an empty 'errorsFound' array.

Text to Analyze:
"{text}""#
    )
}

/// Build the language-detection prompt
pub(crate) fn detection_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following text and determine its primary language.
Focus on identifying if the language is English, Malayalam, Tamil, Kannada, or Hindi.
If it's clearly one of these, set 'detectedLanguage' to "english", "malayalam", "tamil", "kannada", or "hindi" respectively and 'isConfident' to true.
If the text is too short, a mix of languages, or a language other than these five, set 'detectedLanguage' to "other" and 'isConfident' to false.
If you are somewhat sure but not entirely, you can still pick one of the five languages and set 'isConfident' to false.

Text:
"{text}"

Provide only the JSON output."#
    )
}

/// Build the summarization prompt
pub(crate) fn summary_prompt(text: &str, language: LanguageCode) -> String {
    format!(
        r#"You are an expert at creating concise, high-quality summaries.
Your task is to summarize the following text.

**CRITICAL INSTRUCTIONS:**
1.  **Language:** The summary MUST be written in **{language}**.
2.  **Conciseness:** The summary should be significantly shorter than the original text but must retain all key information, main points, and conclusions.
3.  **Accuracy:** Do not add new information or misinterpret the original text.
4.  **Clarity:** The summary should be clear, well-written, and easy to understand.

**Text to Summarize:**
"{text}"

Return a JSON object with a single 'summary' field."#,
        language = language.display_name(),
        text = text,
    )
}
