use pangram_types::NormalizedPhrase;
use unicode_normalization::UnicodeNormalization;

/// Converts raw phrases into the letter-only form used for classification.
///
/// Applies, in order:
/// - Lowercasing (Unicode-aware, locale-independent)
/// - Canonical decomposition (NFD) and removal of combining marks
/// - Folding `ç` to `c`
/// - Removal of every character outside `a`-`z`
///
/// The output only ever contains ASCII lowercase letters, so normalizing an
/// already normalized phrase returns it unchanged.
///
/// Characters that canonical decomposition does not reduce to a base letter
/// (ligatures, full-width forms, `ß`, `ø`, non-Latin scripts) are dropped.
///
/// # Examples
///
/// ```
/// use pangram_core::analyzer::PhraseNormalizer;
///
/// let normalizer = PhraseNormalizer::new();
/// assert_eq!(normalizer.normalize("Olá, Coração!"), "olacoracao");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseNormalizer;

impl PhraseNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes `input` into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut NormalizedPhrase) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() && bytes[i].is_ascii() {
            out.push(bytes[i].to_ascii_lowercase() as char);
            i += 1;
        }

        if i == bytes.len() {
            return;
        }

        // Every byte before `i` was ASCII, so `i` is a char boundary.
        let rest = &input[i..];
        let folded = rest
            .chars()
            .flat_map(char::to_lowercase)
            .nfd()
            .filter(|&c| !is_combining_mark(c))
            .map(fold_cedilla);

        out.extend(folded);
    }

    /// Normalizes `input` into a new phrase.
    #[inline]
    pub fn normalize(&self, input: &str) -> NormalizedPhrase {
        let mut out = NormalizedPhrase::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }
}

/// Normalizes `input` with the default [`PhraseNormalizer`].
#[inline]
pub fn normalize(input: &str) -> NormalizedPhrase {
    PhraseNormalizer::new().normalize(input)
}

#[inline(always)]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[inline(always)]
fn fold_cedilla(c: char) -> char {
    match c {
        'ç' => 'c',
        _ => c,
    }
}
