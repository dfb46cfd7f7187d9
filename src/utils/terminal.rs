//! Terminal output sanitization for generated text
//!
//! Everything the generator returns is untrusted prose that ends up painted
//! into the terminal. Escape sequences embedded in it could clear the screen,
//! move the cursor, retitle the window or smuggle hyperlinks, so records are
//! passed through [`sanitize_generated_text`] once at normalization time.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips terminal escape sequences and control characters from generated text.
///
/// Removes CSI sequences (`ESC [ ... final`), OSC sequences (`ESC ] ... BEL`
/// or `ESC ] ... ESC \`) and any other control character except newline and
/// tab. Carriage returns are dropped so `\r\n` collapses to `\n`.
///
/// # Examples
///
/// ```
/// use startup_sunsets::utils::terminal::sanitize_generated_text;
///
/// assert_eq!(sanitize_generated_text("\x1b[31mTheranos\x1b[0m"), "Theranos");
/// ```
pub fn sanitize_generated_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.peek() {
                Some('[') => {
                    chars.next();
                    // CSI ends at the first byte in 0x40..=0x7E
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == BEL {
                            break;
                        }
                        if next == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                Some(_) => {
                    // Two-byte escape such as ESC c (full reset)
                    chars.next();
                }
                None => {}
            }
            continue;
        }

        if ch.is_control() && ch != '\n' && ch != '\t' {
            continue;
        }

        result.push(ch);
    }

    result
}
