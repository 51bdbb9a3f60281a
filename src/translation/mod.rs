/*!
 * Word translation.
 *
 * - `cache`: one-shot dictionary lookups persisted in the word store
 */

pub mod cache;

pub use self::cache::{EnsureOutcome, TranslationCache, TranslationOutcome};
