/*!
 * Translation of subtitle blocks through a chat provider.
 *
 * - `batch`: sequential batch loop, output appends and failure handling
 * - `conversation`: role-tagged message history resent with each request
 * - `prompts`: system instruction for the model
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, TranslationOptions, TranslationSummary, batch_count};
pub use self::conversation::{Conversation, Message, Role};

// Submodules
pub mod batch;
pub mod conversation;
pub mod prompts;
