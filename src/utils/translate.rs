use std::collections::HashMap;

use crate::utils::errors::UtilsError;

/// Character-to-character mapping for use with [`translate`].
pub type TranslationDictionary = HashMap<char, char>;

/// Builds a translation dictionary mapping each character of `src` to the
/// character at the same position in `dst`.
///
/// # Errors
///
/// Returns an error when the inputs differ in length or `src` contains a
/// repeated character.
pub fn make_trans(src: &str, dst: &str) -> Result<TranslationDictionary, UtilsError> {
    let src_length = src.chars().count();
    let dst_length = dst.chars().count();
    if src_length != dst_length {
        return Err(UtilsError::LengthMismatch {
            src: src_length,
            dst: dst_length,
        });
    }

    let mut dictionary = TranslationDictionary::with_capacity(src_length);
    for (index, (from, to)) in src.chars().zip(dst.chars()).enumerate() {
        if dictionary.insert(from, to).is_some() {
            return Err(UtilsError::DuplicateCharacter {
                character: from,
                index,
            });
        }
    }

    Ok(dictionary)
}

/// Returns a copy of `text` with each character mapped through `dictionary`
/// in a single pass; characters without a mapping map to themselves.
pub fn translate(text: &str, dictionary: &TranslationDictionary) -> String {
    text.chars()
        .map(|ch| dictionary.get(&ch).copied().unwrap_or(ch))
        .collect()
}
