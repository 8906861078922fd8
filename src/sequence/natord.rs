use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Strategy that decides playback order of image file names.
///
/// The ordering must be a deterministic total order: it alone assigns ordinals, and ordinals
/// decide which image shows on which frame.
pub trait NameOrder {
    /// Compare two file names.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Case-insensitive, numeric-aware ordering (`image_2` before `image_10`).
///
/// Independent of the platform locale: digit runs compare by numeric value (arbitrary length),
/// other characters compare by class (punctuation, then digits, then letters) and then by
/// lowercase code point. Accented letters are not folded to their base letter, so
/// `éclair` sorts after `zebra`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl NameOrder for NaturalOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        natural_cmp(a, b)
    }
}

/// Plain byte-wise ordering. Mostly useful to contrast with [`NaturalOrder`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalOrder;

impl NameOrder for LexicalOrder {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Natural comparison of two names.
///
/// Names equal under the case-folded numeric comparison are tie-broken by fewer leading zeros
/// in the first differing digit run, then by raw byte order, so distinct names never compare
/// equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();
    let mut zeros = Ordering::Equal;

    let primary = loop {
        let (ca, cb) = match (ai.peek().copied(), bi.peek().copied()) {
            (None, None) => break Ordering::Equal,
            (None, Some(_)) => break Ordering::Less,
            (Some(_), None) => break Ordering::Greater,
            (Some(ca), Some(cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let ra = DigitRun::take(&mut ai);
            let rb = DigitRun::take(&mut bi);
            match ra.cmp_value(&rb) {
                Ordering::Equal => {}
                ord => break ord,
            }
            if zeros == Ordering::Equal {
                zeros = ra.leading_zeros.cmp(&rb.leading_zeros);
            }
            continue;
        }

        match char_key(ca).cmp(&char_key(cb)) {
            Ordering::Equal => {
                ai.next();
                bi.next();
            }
            ord => break ord,
        }
    };

    primary.then(zeros).then_with(|| a.cmp(b))
}

struct DigitRun {
    significant: String,
    leading_zeros: usize,
}

impl DigitRun {
    fn take(it: &mut Peekable<Chars<'_>>) -> Self {
        let mut significant = String::new();
        let mut leading_zeros = 0usize;
        while let Some(c) = it.next_if(char::is_ascii_digit) {
            if c == '0' && significant.is_empty() {
                leading_zeros += 1;
            } else {
                significant.push(c);
            }
        }
        Self {
            significant,
            leading_zeros,
        }
    }

    fn cmp_value(&self, other: &Self) -> Ordering {
        self.significant
            .len()
            .cmp(&other.significant.len())
            .then_with(|| self.significant.cmp(&other.significant))
    }
}

fn char_key(c: char) -> (u8, char) {
    if c.is_ascii_digit() {
        (1, c)
    } else if c.is_alphanumeric() {
        (2, c.to_lowercase().next().unwrap_or(c))
    } else {
        (0, c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/natord.rs"]
mod tests;
