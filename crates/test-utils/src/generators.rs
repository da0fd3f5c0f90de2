//! Bitmap encoders for generating decoder test input.
//!
//! Production code only ever decodes bitmaps; these encoders exist so tests
//! can build bitmaps for arbitrary code sets.

/// Encode ascending codes with plain `'0'`/`'1'` bits.
///
/// The bit string starts at the first code and has one character per code
/// up to the last one. An empty slice encodes to an empty string.
///
/// # Example
///
/// ```
/// use test_utils::encode_bitmap;
///
/// assert_eq!(encode_bitmap(&[10, 12, 13]), "10:1011");
/// ```
pub fn encode_bitmap(codes: &[i64]) -> String {
    let (Some(&first), Some(&last)) = (codes.first(), codes.last()) else {
        return String::new();
    };

    let mut bits = String::with_capacity((last - first + 1) as usize);
    let mut next = codes.iter().copied().peekable();
    for value in first..=last {
        if next.peek() == Some(&value) {
            next.next();
            bits.push('1');
        } else {
            bits.push('0');
        }
    }
    format!("{}:{}", first, bits)
}

/// Encode ascending codes with the compact alphabet.
///
/// Gaps use the skip-then-emit characters (with `'z'` for every full
/// 27-code skip beyond that), and runs of consecutive codes use the
/// upper-case run letters.
///
/// # Example
///
/// ```
/// use test_utils::encode_compact;
///
/// assert_eq!(encode_compact(&[0, 1, 2, 3, 8]), "0:C5");
/// ```
pub fn encode_compact(codes: &[i64]) -> String {
    let Some(&first) = codes.first() else {
        return String::new();
    };

    let mut bits = String::new();
    let mut cursor = first;
    let mut i = 0;
    while i < codes.len() {
        let start = codes[i];
        let mut run = 1;
        while i + run < codes.len() && codes[i + run] == start + run as i64 {
            run += 1;
        }

        let mut remaining = run;
        let mut gap = start - cursor;
        if gap > 0 {
            while gap > 27 {
                bits.push('z');
                gap -= 27;
            }
            push_skip_then_emit(&mut bits, gap);
            remaining -= 1;
        }

        while remaining >= 2 {
            let len = remaining.min(27);
            bits.push((b'A' + (len - 2) as u8) as char);
            remaining -= len;
        }
        if remaining == 1 {
            bits.push('1');
        }

        cursor = start + run as i64;
        i += run;
    }
    format!("{}:{}", first, bits)
}

/// Encode codes as a literal `!`-list.
pub fn encode_literal(codes: &[i64]) -> String {
    let list: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    format!("!{}", list.join(","))
}

/// Skip `gap` codes (1 to 27) and emit the next one.
fn push_skip_then_emit(bits: &mut String, gap: i64) {
    match gap {
        1..=8 => bits.push((b'2' + (gap - 1) as u8) as char),
        9..=19 => bits.push((b'!' + (gap - 9) as u8) as char),
        // No single character skips exactly 20
        20 => bits.push_str("s1"),
        21..=26 => bits.push((b';' + (gap - 21) as u8) as char),
        27 => bits.push('.'),
        _ => unreachable!("gap {} out of range", gap),
    }
}
