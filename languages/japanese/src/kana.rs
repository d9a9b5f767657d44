//! Kana conversion.
//!
//! [`ROMAJI_TABLE`] is the single romaji table for the whole toolkit. The
//! romaji accepted here is the loose, English-flavoured kind found in the
//! vocabulary data (`ti` is ティ, `l` reads as the r-row, a trailing `r` after a
//! vowel lengthens it), so output is a best-effort loanword reading rather than
//! strict Hepburn.

use std::collections::HashMap;
use std::sync::LazyLock;

use tango_core::validate::ReadingScript;
use unicode_normalization::UnicodeNormalization;

/// Romaji syllable to katakana
pub const ROMAJI_TABLE: &[(&str, &str)] = &[
    ("a", "ア"), ("i", "イ"), ("u", "ウ"), ("e", "エ"), ("o", "オ"),
    ("ka", "カ"), ("ki", "キ"), ("ku", "ク"), ("ke", "ケ"), ("ko", "コ"),
    ("kya", "キャ"), ("kyu", "キュ"), ("kyo", "キョ"),
    ("ga", "ガ"), ("gi", "ギ"), ("gu", "グ"), ("ge", "ゲ"), ("go", "ゴ"),
    ("gya", "ギャ"), ("gyu", "ギュ"), ("gyo", "ギョ"),
    ("sa", "サ"), ("si", "シ"), ("su", "ス"), ("se", "セ"), ("so", "ソ"),
    ("shi", "シ"), ("sha", "シャ"), ("shu", "シュ"), ("she", "シェ"), ("sho", "ショ"),
    ("sya", "シャ"), ("syu", "シュ"), ("syo", "ショ"),
    ("za", "ザ"), ("zi", "ジ"), ("zu", "ズ"), ("ze", "ゼ"), ("zo", "ゾ"),
    ("ja", "ジャ"), ("ji", "ジ"), ("ju", "ジュ"), ("je", "ジェ"), ("jo", "ジョ"),
    ("jya", "ジャ"), ("jyu", "ジュ"), ("jyo", "ジョ"),
    ("ta", "タ"), ("ti", "ティ"), ("tu", "トゥ"), ("te", "テ"), ("to", "ト"),
    ("chi", "チ"), ("cha", "チャ"), ("chu", "チュ"), ("che", "チェ"), ("cho", "チョ"),
    ("tsa", "ツァ"), ("tsu", "ツ"),
    ("tya", "チャ"), ("tyu", "チュ"), ("tyo", "チョ"),
    ("da", "ダ"), ("di", "ディ"), ("du", "ドゥ"), ("de", "デ"), ("do", "ド"),
    ("dya", "ヂャ"), ("dyu", "デュ"), ("dyo", "ヂョ"),
    ("na", "ナ"), ("ni", "ニ"), ("nu", "ヌ"), ("ne", "ネ"), ("no", "ノ"),
    ("nya", "ニャ"), ("nyu", "ニュ"), ("nyo", "ニョ"),
    ("ha", "ハ"), ("hi", "ヒ"), ("hu", "フ"), ("he", "ヘ"), ("ho", "ホ"),
    ("hya", "ヒャ"), ("hyu", "ヒュ"), ("hyo", "ヒョ"),
    ("fa", "ファ"), ("fi", "フィ"), ("fu", "フ"), ("fe", "フェ"), ("fo", "フォ"),
    ("fyu", "フュ"),
    ("ba", "バ"), ("bi", "ビ"), ("bu", "ブ"), ("be", "ベ"), ("bo", "ボ"),
    ("bya", "ビャ"), ("byu", "ビュ"), ("byo", "ビョ"),
    ("pa", "パ"), ("pi", "ピ"), ("pu", "プ"), ("pe", "ペ"), ("po", "ポ"),
    ("pya", "ピャ"), ("pyu", "ピュ"), ("pyo", "ピョ"),
    ("ma", "マ"), ("mi", "ミ"), ("mu", "ム"), ("me", "メ"), ("mo", "モ"),
    ("mya", "ミャ"), ("myu", "ミュ"), ("myo", "ミョ"),
    ("ya", "ヤ"), ("yu", "ユ"), ("ye", "イェ"), ("yo", "ヨ"),
    ("ra", "ラ"), ("ri", "リ"), ("ru", "ル"), ("re", "レ"), ("ro", "ロ"),
    ("rya", "リャ"), ("ryu", "リュ"), ("ryo", "リョ"),
    ("la", "ラ"), ("li", "リ"), ("lu", "ル"), ("le", "レ"), ("lo", "ロ"),
    ("wa", "ワ"), ("wi", "ウィ"), ("we", "ウェ"), ("wo", "ウォ"),
    ("wha", "ワ"), ("whi", "ウィ"), ("whe", "ウェ"), ("who", "ホ"),
    ("va", "ヴァ"), ("vi", "ヴィ"), ("vu", "ヴ"), ("ve", "ヴェ"), ("vo", "ヴォ"),
    ("ca", "カ"), ("ci", "シ"), ("cu", "ク"), ("ce", "セ"), ("co", "コ"),
    ("qu", "ク"),
    ("tha", "サ"), ("thi", "シ"), ("thu", "ス"), ("the", "セ"), ("tho", "ソ"),
    ("pha", "ファ"), ("phi", "フィ"), ("phu", "フ"), ("phe", "フェ"), ("pho", "フォ"),
    ("xa", "クサ"), ("xi", "クシ"), ("xe", "クセ"),
];

/// Consonant clusters with no vowel after them
const BARE_CONSONANTS: &[(&str, &str)] = &[
    ("sh", "シュ"), ("ch", "チ"), ("th", "ス"), ("ph", "フ"), ("ts", "ツ"),
    ("b", "ブ"), ("c", "ク"), ("d", "ド"), ("f", "フ"), ("g", "グ"),
    ("h", ""), ("j", "ジ"), ("k", "ク"), ("l", "ル"), ("m", "ム"),
    ("n", "ン"), ("p", "プ"), ("q", "ク"), ("r", "ル"), ("s", "ス"),
    ("t", "ト"), ("v", "ブ"), ("w", "ウ"), ("x", "クス"), ("y", "イ"),
    ("z", "ズ"),
];

const LONGEST_SYLLABLE: usize = 3;

static SYLLABLES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ROMAJI_TABLE.iter().copied().collect());

static BARE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| BARE_CONSONANTS.iter().copied().collect());

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

/// Lowercase, expand macrons to `-`, drop apostrophes and spaces
fn prepare(text: &str) -> Option<Vec<char>> {
    let mut chars = Vec::with_capacity(text.len());
    for c in text.trim().chars().flat_map(char::to_lowercase) {
        match c {
            'a'..='z' | '-' => chars.push(c),
            'ā' | 'â' => chars.extend(['a', '-']),
            'ī' | 'î' => chars.extend(['i', '-']),
            'ū' | 'û' => chars.extend(['u', '-']),
            'ē' | 'ê' => chars.extend(['e', '-']),
            'ō' | 'ô' => chars.extend(['o', '-']),
            '\'' | '’' | ' ' | '\t' => {}
            _ => return None,
        }
    }
    Some(chars)
}

/// Longest table match at the start of `rest`
fn match_syllable(rest: &[char], table: &HashMap<&str, &'static str>) -> Option<(usize, &'static str)> {
    (1..=LONGEST_SYLLABLE.min(rest.len())).rev().find_map(|len| {
        let key: String = rest[..len].iter().collect();
        table.get(key.as_str()).map(|kana| (len, *kana))
    })
}

/// Transliterate ASCII romaji; `None` when something cannot be mapped
pub fn romaji_to_katakana(text: &str) -> Option<String> {
    let chars = prepare(text)?;
    let mut out = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();
        let after = chars.get(i + 2).copied();
        let prev_vowel = i > 0 && is_vowel(chars[i - 1]);

        if c == '-' {
            out.push('ー');
            i += 1;
            continue;
        }

        if c == 'n' {
            match next {
                Some(n) if is_vowel(n) || n == 'y' => {}
                Some('n') if !after.is_some_and(|a| is_vowel(a) || a == 'y') => {
                    out.push('ン');
                    i += 2;
                    continue;
                }
                _ => {
                    out.push('ン');
                    i += 1;
                    continue;
                }
            }
        }

        if c == 'm' && matches!(next, Some('b' | 'p' | 'm')) {
            out.push('ン');
            i += 1;
            continue;
        }

        // l and r never geminate in loanwords: "hello" is ヘロ, not ヘッロ
        if matches!(c, 'l' | 'r') && next == Some(c) {
            i += 1;
            continue;
        }

        if is_consonant(c)
            && (next == Some(c) || (c == 't' && next == Some('c')) || (c == 'c' && next == Some('k')))
        {
            out.push('ッ');
            i += 1;
            continue;
        }

        if let Some((len, kana)) = match_syllable(&chars[i..], &SYLLABLES) {
            out.push_str(kana);
            i += len;
            continue;
        }

        if c == 'r' && prev_vowel && !out.ends_with('ー') {
            out.push('ー');
            i += 1;
            continue;
        }

        if let Some((len, kana)) = match_syllable(&chars[i..], &BARE) {
            out.push_str(kana);
            i += len;
            continue;
        }

        return None;
    }

    if out.is_empty() { None } else { Some(out) }
}

/// ぁ-ゖ and ゝゞ to their katakana counterparts; everything else unchanged
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3041}'..='\u{3096}' | '\u{309D}' | '\u{309E}' => {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

fn is_katakana_char(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
}

fn is_hiragana_char(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

/// ASCII plus the long-vowel marks Hepburn spellings use
fn is_romaji_char(c: char) -> bool {
    c.is_ascii()
        || matches!(
            c.to_lowercase().next(),
            Some('ā' | 'â' | 'ī' | 'î' | 'ū' | 'û' | 'ē' | 'ê' | 'ō' | 'ô' | '’')
        )
}

fn is_space(c: char) -> bool {
    c == ' ' || c == '\u{3000}'
}

/// Katakana (with ー, ・ and spaces), and not blank
pub fn is_katakana(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text.chars().all(|c| is_katakana_char(c) || is_space(c))
}

/// Katakana reading for a headword or reading cell.
///
/// Katakana passes through unchanged, so converting an already-correct
/// reading is a no-op. Hiragana is shifted, ASCII romaji transliterated.
/// Anything else (kanji, digits, symbols) yields `None`.
pub fn to_katakana(text: &str) -> Option<String> {
    let text: String = text.trim().nfkc().collect();
    if text.is_empty() {
        return None;
    }

    if is_katakana(&text) {
        return Some(text);
    }

    if text
        .chars()
        .all(|c| is_hiragana_char(c) || is_katakana_char(c) || is_space(c))
    {
        return Some(hiragana_to_katakana(&text));
    }

    if text.chars().all(is_romaji_char) {
        return romaji_to_katakana(&text);
    }

    None
}

/// Reading check used by the validator
pub struct Katakana;

impl ReadingScript for Katakana {
    fn is_valid_reading(&self, text: &str) -> bool {
        is_katakana(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_common_syllables() {
        assert_eq!(romaji_to_katakana("sushi").as_deref(), Some("スシ"));
        assert_eq!(romaji_to_katakana("camera").as_deref(), Some("カメラ"));
        assert_eq!(romaji_to_katakana("piano").as_deref(), Some("ピアノ"));
        assert_eq!(romaji_to_katakana("Violin").as_deref(), Some("ヴィオリン"));
    }

    #[test]
    fn handles_sokuon_and_syllabic_n() {
        assert_eq!(romaji_to_katakana("kitte").as_deref(), Some("キッテ"));
        assert_eq!(romaji_to_katakana("konnichiwa").as_deref(), Some("コンニチワ"));
        assert_eq!(romaji_to_katakana("konn").as_deref(), Some("コン"));
        assert_eq!(romaji_to_katakana("back").as_deref(), Some("バック"));
        assert_eq!(romaji_to_katakana("shimbun").as_deref(), Some("シンブン"));
    }

    #[test]
    fn long_vowels() {
        assert_eq!(romaji_to_katakana("car").as_deref(), Some("カー"));
        assert_eq!(romaji_to_katakana("to-suto").as_deref(), Some("トースト"));
        assert_eq!(romaji_to_katakana("tōkyō").as_deref(), Some("トーキョー"));
    }

    #[test]
    fn unmappable_input_gives_none() {
        assert_eq!(romaji_to_katakana("r2d2"), None);
        assert_eq!(romaji_to_katakana(""), None);
        assert_eq!(romaji_to_katakana("h"), None);
    }

    #[test]
    fn hiragana_shifts_to_katakana() {
        assert_eq!(hiragana_to_katakana("りんご"), "リンゴ");
        assert_eq!(hiragana_to_katakana("きゃっと・ー"), "キャット・ー");
    }

    #[test]
    fn katakana_detection() {
        assert!(is_katakana("アイスクリーム"));
        assert!(is_katakana("ホット ドッグ"));
        assert!(is_katakana("ジョン・スミス"));
        assert!(!is_katakana("りんご"));
        assert!(!is_katakana("apple"));
        assert!(!is_katakana("  "));
    }

    #[test]
    fn to_katakana_is_idempotent() {
        for input in ["アップル", "りんご", "sakura", "ﾊﾟﾝ"] {
            let once = to_katakana(input).unwrap();
            assert_eq!(to_katakana(&once).as_deref(), Some(once.as_str()));
        }
        assert_eq!(to_katakana("ﾊﾟﾝ").as_deref(), Some("パン"));
        assert_eq!(to_katakana("林檎"), None);
    }

    #[test]
    fn hepburn_long_vowels_reach_transliteration() {
        assert_eq!(to_katakana("tōkyō").as_deref(), Some("トーキョー"));
        assert_eq!(to_katakana("Ōsaka").as_deref(), Some("オーサカ"));
        assert_eq!(to_katakana("café"), None);
    }
}
