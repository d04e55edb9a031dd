/*!
 * System prompt for subtitle batch translation.
 */

use crate::language_utils;

/// Instruction template; `{target_language}` is replaced with the language name
const SYSTEM_PROMPT_TEMPLATE: &str = "You're a bot that takes subtitles blocks and translates them in {target_language}. \
Keep the subtitle number, the timeline and the eventual formatting unchanged. \
Don't add comments or remarks, just send the translated subtitle blocks.";

/// Build the system instruction for `target_language`
pub fn system_prompt(target_language: &str) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace(
        "{target_language}",
        &language_utils::prompt_language_name(target_language),
    )
}
