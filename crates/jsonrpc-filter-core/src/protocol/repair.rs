//! Lossy text repair applied before classification.
//!
//! JSON-RPC backends written in Go accept invalid UTF-8 and lone UTF-16
//! surrogate escapes (`\ud800`) in strings, decoding both as U+FFFD.
//! `serde_json` rejects them, which would leave such bodies unclassified
//! and forward them without a policy check. `repair` rewrites them to
//! U+FFFD so classification sees what the backend will see.
//!
//! The output is only used for classification; the forwarded body is the
//! original bytes.

use std::borrow::Cow;

/// Replace invalid UTF-8 and unpaired surrogate escapes with U+FFFD.
/// Returns the input unchanged (borrowed) when nothing needs repair.
pub fn repair(body: &[u8]) -> Cow<'_, [u8]> {
    let text = String::from_utf8_lossy(body);
    let bytes = text.as_bytes();

    let mut out = Vec::with_capacity(bytes.len());
    let mut changed = matches!(text, Cow::Owned(_));
    let mut in_string = false;
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        if !in_string {
            in_string = b == b'"';
            out.push(b);
            i += 1;
            continue;
        }

        match b {
            b'"' => {
                in_string = false;
                out.push(b);
                i += 1;
            }
            b'\\' => match (bytes.get(i + 1), hex4(bytes, i + 2)) {
                (Some(b'u'), Some(cp)) if is_surrogate(cp) => {
                    let paired = is_high(cp)
                        && bytes.get(i + 6) == Some(&b'\\')
                        && bytes.get(i + 7) == Some(&b'u')
                        && hex4(bytes, i + 8).is_some_and(is_low);
                    match bytes.get(i..i + 12) {
                        Some(pair) if paired => {
                            out.extend_from_slice(pair);
                            i += 12;
                        }
                        _ => {
                            out.extend_from_slice(b"\\uFFFD");
                            changed = true;
                            i += 6;
                        }
                    }
                }
                (Some(&next), _) => {
                    // keeps `\"` from closing the string
                    out.push(b);
                    out.push(next);
                    i += 2;
                }
                (None, _) => {
                    out.push(b);
                    i += 1;
                }
            },
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }

    if changed {
        Cow::Owned(out)
    } else {
        Cow::Borrowed(body)
    }
}

fn hex4(bytes: &[u8], at: usize) -> Option<u16> {
    let digits = bytes.get(at..at + 4)?;
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    let s = std::str::from_utf8(digits).ok()?;
    u16::from_str_radix(s, 16).ok()
}

fn is_surrogate(cp: u16) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

fn is_high(cp: u16) -> bool {
    (0xD800..=0xDBFF).contains(&cp)
}

fn is_low(cp: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&cp)
}
